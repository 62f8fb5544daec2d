use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionType {
    #[default]
    Monthly,
    Weekly,
}

#[derive(Validate, Debug, Clone)]
pub struct PlanInput {
    pub subscription_type: SubscriptionType,
    #[validate(length(min = 1, message = "Enter the price you afford"))]
    pub price: String,
}

/// What the price selection screen hands over to packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub subscription_type: SubscriptionType,
    pub price: u32,
}

impl SubscriptionPlan {
    pub fn new(input: PlanInput) -> ozkitchen_shared::Result<Self> {
        input.validate()?;

        let Ok(price) = input.price.trim().parse::<u32>() else {
            ozkitchen_shared::bail!("Price must be a whole number, got `{}`", input.price.trim());
        };

        if price == 0 {
            ozkitchen_shared::bail!("Price must be greater than zero");
        }

        Ok(Self {
            subscription_type: input.subscription_type,
            price,
        })
    }
}
