use crate::domain::model::{DiscountTier, Price};
use rand::Rng;

/// Draws a discount uniformly from the tier's closed range.
pub fn generate_discount<R: Rng>(tier: DiscountTier, rng: &mut R) -> Price {
    rng.gen_range(tier.discount_range())
}
