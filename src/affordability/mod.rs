//! Home affordability: debt-to-income and maximum price / loan estimates

mod estimator;

pub use estimator::{
    estimate_affordability, estimate_max_loan_from_payment, AffordabilityEstimate, AffordabilityEstimator,
    AffordabilityInputs,
};
