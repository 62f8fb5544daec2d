use ozkitchen_checkout::{OrderSession, PlanInput, SubscriptionType};
use ozkitchen_packaging::{Catalog, default_meal_options};

pub fn session() -> anyhow::Result<OrderSession> {
    let catalog = Catalog::new(default_meal_options())?;

    Ok(OrderSession::new(catalog, "Africa/Addis_Ababa"))
}

/// Session sitting on the packaging screen with a weekly plan.
pub fn packaging_session() -> anyhow::Result<OrderSession> {
    let mut session = session()?;
    session.start()?;
    session.choose_plan(PlanInput {
        subscription_type: SubscriptionType::Weekly,
        price: "1000".to_owned(),
    })?;

    Ok(session)
}
