//! Filter flags shared by every subcommand.

use clap::Args;
use hma_housing::{BedroomCategory, FilterQuery};

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Lowest sale price to include
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest sale price to include
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Smallest living area to include, in sqft
    #[arg(long)]
    pub min_sqft: Option<f64>,

    /// Largest living area to include, in sqft
    #[arg(long)]
    pub max_sqft: Option<f64>,

    /// Only include one bedroom category (small, medium or large)
    #[arg(long)]
    pub bedroom_category: Option<BedroomCategory>,
}

impl FilterArgs {
    /// Swapped bounds are put back in order before they reach the service.
    pub fn to_query(&self) -> FilterQuery {
        let (min_price, max_price) = ordered(self.min_price, self.max_price);
        let (min_sqft, max_sqft) = ordered(self.min_sqft, self.max_sqft);
        FilterQuery {
            min_price,
            max_price,
            bedroom_category: self.bedroom_category,
            min_sqft,
            max_sqft,
        }
    }
}

fn ordered(low: Option<f64>, high: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (low, high) {
        (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
        other => other,
    }
}
