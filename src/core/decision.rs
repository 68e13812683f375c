use crate::domain::model::{Decision, Price, Product};

/// Applies the pricing rules to one offer.
///
/// Checks run in a fixed order: accept at or above the discounted price,
/// then reject below the catalog floor, otherwise counter with the
/// discounted price. When the discount pushes the discounted price below
/// `min_price` the accept check still wins.
pub fn decide(offer: Price, product: &Product, discount: Price) -> Decision {
    let discounted_price = product.discounted_price(discount);

    if offer >= discounted_price {
        return Decision::Accept {
            offer,
            product: product.id.clone(),
            discount,
        };
    }

    if offer < product.min_price {
        return Decision::RejectTooLow {
            offer,
            product: product.id.clone(),
            min_price: product.min_price,
        };
    }

    Decision::CounterOffer {
        offer,
        product: product.id.clone(),
        discount,
        discounted_price,
    }
}
