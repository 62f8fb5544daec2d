use ozkitchen_checkout::{
    Handoff, OrderConfirmation, OrderSession, PaymentMethod, PlanInput, Receipt, SubscriptionType,
};
use ozkitchen_packaging::EntryId;
use serde::Serialize;
use time::Date;

use crate::{
    config::Config,
    error::{AppError, AppResult},
};

#[derive(clap::Args, Debug, Clone, Default)]
pub struct OrderArgs {
    /// monthly or weekly (defaults to the configured subscription)
    #[arg(long)]
    pub subscription: Option<SubscriptionType>,

    /// Price you afford
    #[arg(long)]
    pub price: String,

    /// Meal option and dates, e.g. `1=2025-10-05,2025-10-06`
    #[arg(long = "add", value_name = "OPTION=DATES")]
    pub add: Vec<String>,

    /// Quantity change for a planned meal, e.g. `1-2025-10-05=-1`
    #[arg(long = "adjust", value_name = "ENTRY=DELTA", allow_hyphen_values = true)]
    pub adjust: Vec<String>,

    #[arg(long, default_value = "telebirr")]
    pub payment: PaymentMethod,

    /// Print the handoff and confirmation as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct OrderOutput<'a> {
    handoff: &'a Handoff,
    confirmation: &'a OrderConfirmation,
}

/// Parses `OPTION=DATE[,DATE...]`.
pub fn parse_addition(value: &str) -> AppResult<(String, Vec<Date>)> {
    let Some((option_id, dates)) = value.split_once('=') else {
        return Err(AppError::InvalidArgument(format!(
            "expected OPTION=DATES, got `{value}`"
        )));
    };

    let dates = dates
        .split(',')
        .filter(|date| !date.trim().is_empty())
        .map(ozkitchen_shared::parse_iso)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((option_id.trim().to_owned(), dates))
}

/// Parses `ENTRY=DELTA`.
pub fn parse_adjustment(value: &str) -> AppResult<(EntryId, i64)> {
    let Some((id, delta)) = value.rsplit_once('=') else {
        return Err(AppError::InvalidArgument(format!(
            "expected ENTRY=DELTA, got `{value}`"
        )));
    };

    let delta = delta
        .trim()
        .parse::<i64>()
        .map_err(|e| AppError::InvalidArgument(format!("{value}: {e}")))?;

    Ok((id.parse()?, delta))
}

/// Walks a whole ordering session from the landing page to the payment
/// choice and renders the result.
#[tracing::instrument(skip_all)]
pub fn run(config: &Config, args: OrderArgs) -> AppResult<String> {
    let catalog = config.catalog()?;
    let ledger = config.planned_ledger(&catalog)?;
    let mut session =
        OrderSession::new(catalog, config.session.timezone.to_owned()).with_ledger(ledger);

    session.start()?;
    session.choose_plan(PlanInput {
        subscription_type: args
            .subscription
            .unwrap_or(config.session.default_subscription),
        price: args.price,
    })?;

    for addition in &args.add {
        let (option_id, dates) = parse_addition(addition)?;
        let Some(first) = dates.first().copied() else {
            tracing::warn!(option = %option_id, "No dates given, nothing added");
            continue;
        };

        let calendar = session.open_calendar_at(&option_id, first)?;
        for date in dates {
            if !calendar.selection().contains(date) {
                calendar.toggle_date(date);
            }
        }
        session.submit_calendar()?;
    }

    for adjustment in &args.adjust {
        let (id, delta) = parse_adjustment(adjustment)?;
        session.adjust_quantity(&id, delta)?;
    }

    let receipt: Receipt = session.proceed_to_receipt()?;
    let handoff = session.handoff();
    session.select_payment(args.payment)?;
    let confirmation = session.confirm()?;

    if args.json {
        let output = OrderOutput {
            handoff: &handoff,
            confirmation: &confirmation,
        };

        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let range = session.ledger().date_range_label().unwrap_or_default();

    Ok(format!(
        "{range}\n{receipt}\nPayment: {}\n",
        confirmation.payment
    ))
}
