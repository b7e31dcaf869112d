//! # Validator Lists
//!
//! One list per state transition. The list captures the data it was built
//! from and hands out boxed validators for each phase.

use crate::failure::{MultipleBusinessExceptions, ValidationFailure};
use crate::validator::BusinessValidator;

/// Ordered, boxed validators borrowing from the list that built them.
pub type Validators<'a, E> = Vec<Box<dyn BusinessValidator<E> + 'a>>;

/// An ordered two-phase composition of validators.
pub trait ValidatorList<E> {
    /// Structural checks, run first, fail-fast. Empty by default.
    fn data_contract_validators(&self) -> Validators<'_, E> {
        Vec::new()
    }

    /// Business rules, run only once the data contract holds. Every one
    /// runs; failures are collected.
    fn invariants_validators(&self) -> Validators<'_, E>;

    /// Run both phases.
    ///
    /// Invariant validators are not even constructed when the data
    /// contract fails.
    fn validate(&self) -> Result<(), ValidationFailure<E>> {
        for validator in self.data_contract_validators() {
            validator.validate().map_err(ValidationFailure::DataContract)?;
        }
        collect_invariants(&self.invariants_validators())
    }
}

/// Function form of the two-phase contract, for call sites that assemble
/// validators without a dedicated list type.
pub fn valider_en_deux_etapes<E>(
    data_contract: &[Box<dyn BusinessValidator<E> + '_>],
    invariants: &[Box<dyn BusinessValidator<E> + '_>],
) -> Result<(), ValidationFailure<E>> {
    for validator in data_contract {
        validator.validate().map_err(ValidationFailure::DataContract)?;
    }
    collect_invariants(invariants)
}

fn collect_invariants<E>(
    invariants: &[Box<dyn BusinessValidator<E> + '_>],
) -> Result<(), ValidationFailure<E>> {
    let exceptions: Vec<E> = invariants
        .iter()
        .filter_map(|validator| validator.validate().err())
        .collect();

    match MultipleBusinessExceptions::from_vec(exceptions) {
        None => Ok(()),
        Some(all) => Err(ValidationFailure::Invariants(all)),
    }
}
