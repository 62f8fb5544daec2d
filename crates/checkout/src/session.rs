use ozkitchen_packaging::{Catalog, EntryId, Ledger, Totals};
use serde::Serialize;
use strum::{AsRefStr, Display};
use time::Date;

use crate::{
    Handoff, MealCalendar, PaymentMethod, PlanInput, Receipt, ReceiptLine, SubscriptionPlan,
};

#[derive(Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Landing,
    PriceSelection,
    Packaging,
    Receipt,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub payment: PaymentMethod,
    pub total_price: u64,
    pub meals: Vec<ReceiptLine>,
}

/// One customer's walk through the ordering screens.
///
/// Owns the chosen plan, the planned meals and the meal calendar dialog
/// while it is open. Nothing outlives the session.
#[derive(Debug, Clone)]
pub struct OrderSession {
    catalog: Catalog,
    timezone: String,
    step: Step,
    plan: Option<SubscriptionPlan>,
    ledger: Ledger,
    calendar: Option<MealCalendar>,
    payment: PaymentMethod,
}

impl OrderSession {
    pub fn new(catalog: Catalog, timezone: impl Into<String>) -> Self {
        Self {
            catalog,
            timezone: timezone.into(),
            step: Step::default(),
            plan: None,
            ledger: Ledger::new(),
            calendar: None,
            payment: PaymentMethod::default(),
        }
    }

    /// Starts packaging from already planned meals.
    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn plan(&self) -> Option<&SubscriptionPlan> {
        self.plan.as_ref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    fn expect_step(&self, step: Step) -> ozkitchen_shared::Result<()> {
        if self.step != step {
            ozkitchen_shared::bail!("Expected step {}, session is at {}", step, self.step);
        }

        Ok(())
    }

    /// "Get Started" on the landing page.
    pub fn start(&mut self) -> ozkitchen_shared::Result<()> {
        self.expect_step(Step::Landing)?;
        self.step = Step::PriceSelection;

        Ok(())
    }

    #[tracing::instrument(skip_all, fields(subscription = %input.subscription_type))]
    pub fn choose_plan(&mut self, input: PlanInput) -> ozkitchen_shared::Result<()> {
        self.expect_step(Step::PriceSelection)?;

        let plan = SubscriptionPlan::new(input)?;
        tracing::info!(price = plan.price, "Plan chosen");

        self.plan = Some(plan);
        self.step = Step::Packaging;

        Ok(())
    }

    /// Goes back one screen. The plan and planned meals are kept.
    pub fn back(&mut self) {
        self.calendar = None;
        self.step = match self.step {
            Step::Landing | Step::PriceSelection => Step::Landing,
            Step::Packaging => Step::PriceSelection,
            Step::Receipt => Step::Packaging,
            Step::Confirmed => Step::Confirmed,
        };
    }

    /// Opens the meal calendar on the current month of the session timezone.
    pub fn open_calendar(
        &mut self,
        option_id: &str,
    ) -> ozkitchen_shared::Result<&mut MealCalendar> {
        let today = ozkitchen_shared::today(&self.timezone);

        self.open_calendar_at(option_id, today)
    }

    #[tracing::instrument(skip(self))]
    pub fn open_calendar_at(
        &mut self,
        option_id: &str,
        reference: Date,
    ) -> ozkitchen_shared::Result<&mut MealCalendar> {
        self.expect_step(Step::Packaging)?;

        let option = self.catalog.require(option_id)?.clone();

        Ok(self.calendar.insert(MealCalendar::new(option, reference)))
    }

    pub fn calendar(&self) -> Option<&MealCalendar> {
        self.calendar.as_ref()
    }

    pub fn calendar_mut(&mut self) -> Option<&mut MealCalendar> {
        self.calendar.as_mut()
    }

    pub fn close_calendar(&mut self) {
        self.calendar = None;
    }

    /// Adds the calendar selection to the planned meals and closes the
    /// dialog. An empty selection does nothing and keeps it open. Returns
    /// the number of dates added.
    #[tracing::instrument(skip_all)]
    pub fn submit_calendar(&mut self) -> ozkitchen_shared::Result<usize> {
        let Some(calendar) = self.calendar.as_mut() else {
            ozkitchen_shared::bail!("Meal calendar is not open");
        };

        let Some(dates) = calendar.submit() else {
            return Ok(0);
        };

        self.ledger = self.ledger.add_selection(calendar.option(), dates.iter().copied());
        tracing::info!(
            option = %calendar.option().id,
            dates = dates.len(),
            "Meal added to plan"
        );
        self.calendar = None;

        Ok(dates.len())
    }

    pub fn adjust_quantity(&mut self, id: &EntryId, delta: i64) -> ozkitchen_shared::Result<()> {
        self.expect_step(Step::Packaging)?;
        self.ledger = self.ledger.adjust_quantity(id, delta);

        Ok(())
    }

    pub fn handoff(&self) -> Handoff {
        let totals = self.ledger.totals();

        Handoff {
            subscription_type: self.plan.map(|plan| plan.subscription_type),
            price: self.plan.map(|plan| plan.price),
            meals: self.ledger.to_vec(),
            total_price: totals.total_price,
            total_meals: totals.total_quantity,
        }
    }

    /// "Next" on the packaging screen, only once at least one meal is planned.
    #[tracing::instrument(skip_all)]
    pub fn proceed_to_receipt(&mut self) -> ozkitchen_shared::Result<Receipt> {
        self.expect_step(Step::Packaging)?;

        if self.ledger.totals().total_quantity == 0 {
            ozkitchen_shared::bail!("Add at least one meal before continuing");
        }

        self.calendar = None;
        self.step = Step::Receipt;

        Ok(Receipt::new(&self.handoff(), &self.catalog))
    }

    pub fn select_payment(&mut self, payment: PaymentMethod) -> ozkitchen_shared::Result<()> {
        self.expect_step(Step::Receipt)?;
        self.payment = payment;

        Ok(())
    }

    /// Records the payment choice with the final total. No payment is
    /// processed.
    #[tracing::instrument(skip_all, fields(payment = %self.payment))]
    pub fn confirm(&mut self) -> ozkitchen_shared::Result<OrderConfirmation> {
        self.expect_step(Step::Receipt)?;

        let receipt = Receipt::new(&self.handoff(), &self.catalog);
        tracing::info!(total_price = receipt.subtotal, "Payment selected");

        self.step = Step::Confirmed;

        Ok(OrderConfirmation {
            payment: self.payment,
            total_price: receipt.subtotal,
            meals: receipt.lines,
        })
    }
}
