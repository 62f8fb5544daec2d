use ozkitchen_checkout::{PaymentMethod, PlanInput, Step, SubscriptionType};
use ozkitchen_packaging::{EntryId, Totals, sample_plan};
use ozkitchen_shared::Error;
use time::macros::date;

mod helpers;

#[test]
pub fn test_full_order() -> anyhow::Result<()> {
    let mut session = helpers::packaging_session()?;
    assert_eq!(session.step(), Step::Packaging);

    let calendar = session.open_calendar_at("1", date!(2025 - 10 - 01))?;
    // Oct 2025 starts on a Wednesday: index 6 is the 5th, index 7 the 6th
    assert!(calendar.toggle_cell(6));
    assert!(calendar.toggle_cell(7));
    assert_eq!(session.submit_calendar()?, 2);
    assert!(session.calendar().is_none());

    session
        .open_calendar_at("1", date!(2025 - 10 - 20))?
        .toggle_date(date!(2025 - 10 - 05));
    session.submit_calendar()?;

    assert_eq!(
        session.totals(),
        Totals {
            total_quantity: 3,
            total_price: 510
        }
    );

    let receipt = session.proceed_to_receipt()?;
    assert_eq!(session.step(), Step::Receipt);
    assert_eq!(receipt.subscription_type, SubscriptionType::Weekly);
    assert_eq!(receipt.budget, Some(1000));
    assert_eq!(receipt.subtotal, 510);
    assert_eq!(receipt.lines[0].quantity, 2);
    assert_eq!(receipt.lines[0].date_label, "Sunday Oct 5");

    session.select_payment(PaymentMethod::Chapa)?;
    let confirmation = session.confirm()?;

    assert_eq!(confirmation.payment, PaymentMethod::Chapa);
    assert_eq!(confirmation.total_price, 510);
    assert_eq!(session.step(), Step::Confirmed);

    Ok(())
}

#[test]
pub fn test_steps_are_enforced() -> anyhow::Result<()> {
    let mut session = helpers::session()?;

    assert!(matches!(session.open_calendar("1"), Err(Error::Flow(_))));
    assert!(matches!(session.confirm(), Err(Error::Flow(_))));

    session.start()?;
    assert!(matches!(
        session.choose_plan(PlanInput {
            subscription_type: SubscriptionType::Monthly,
            price: String::new(),
        }),
        Err(Error::Validate(_))
    ));
    assert_eq!(session.step(), Step::PriceSelection);

    Ok(())
}

#[test]
pub fn test_cannot_leave_packaging_without_meals() -> anyhow::Result<()> {
    let mut session = helpers::packaging_session()?;

    assert!(matches!(session.proceed_to_receipt(), Err(Error::Flow(_))));
    assert_eq!(session.step(), Step::Packaging);

    Ok(())
}

#[test]
pub fn test_unknown_meal_option_is_rejected() -> anyhow::Result<()> {
    let mut session = helpers::packaging_session()?;

    assert!(matches!(
        session.open_calendar_at("99", date!(2025 - 10 - 01)),
        Err(Error::UnknownMealOption(id)) if id == "99"
    ));
    assert!(session.calendar().is_none());

    Ok(())
}

#[test]
pub fn test_empty_submit_keeps_calendar_open() -> anyhow::Result<()> {
    let mut session = helpers::packaging_session()?;
    session.open_calendar_at("2", date!(2025 - 10 - 01))?;

    assert_eq!(session.submit_calendar()?, 0);
    assert!(session.calendar().is_some());
    assert!(session.ledger().is_empty());

    session.close_calendar();
    assert!(matches!(session.submit_calendar(), Err(Error::Flow(_))));

    Ok(())
}

#[test]
pub fn test_adjust_quantities_on_sample_week() -> anyhow::Result<()> {
    let session = helpers::packaging_session()?;
    let ledger = sample_plan(session.catalog());
    let mut session = session.with_ledger(ledger);

    session.adjust_quantity(&"3-2025-10-07".parse::<EntryId>()?, 2)?;
    session.adjust_quantity(&"4-2025-10-08".parse::<EntryId>()?, -1)?;

    assert_eq!(session.ledger().len(), 4);
    assert_eq!(session.totals().total_quantity, 6);

    let handoff = session.handoff();
    let json = serde_json::to_value(&handoff)?;
    assert_eq!(json["totalMeals"], 6);
    assert_eq!(json["totalPrice"], 1020);
    assert_eq!(json["subscriptionType"], "weekly");
    assert_eq!(json["meals"][2]["dateISO"], "2025-10-07");
    assert_eq!(json["meals"][2]["quantity"], 3);

    Ok(())
}

#[test]
pub fn test_back_keeps_planned_meals() -> anyhow::Result<()> {
    let mut session = helpers::packaging_session()?;
    session
        .open_calendar_at("5", date!(2025 - 10 - 01))?
        .toggle_date(date!(2025 - 10 - 10));
    session.submit_calendar()?;
    session.proceed_to_receipt()?;

    session.back();
    assert_eq!(session.step(), Step::Packaging);
    assert_eq!(session.ledger().len(), 1);

    session.back();
    assert_eq!(session.step(), Step::PriceSelection);
    assert!(session.plan().is_some());

    Ok(())
}
