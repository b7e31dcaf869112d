//! Property tests for the two-phase validation contract.

use osis_validation::{
    valider_en_deux_etapes, BusinessException, BusinessValidator, ValidationFailure, Validators,
};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Violation(usize);

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rule {} violated", self.0)
    }
}

impl std::error::Error for Violation {}

impl BusinessException for Violation {
    fn status_code(&self) -> &'static str {
        "TEST-1"
    }
}

struct Regle {
    index: usize,
    echoue: bool,
}

impl BusinessValidator<Violation> for Regle {
    fn validate(&self) -> Result<(), Violation> {
        if self.echoue {
            Err(Violation(self.index))
        } else {
            Ok(())
        }
    }
}

fn build(flags: &[bool], offset: usize) -> Validators<'static, Violation> {
    flags
        .iter()
        .enumerate()
        .map(|(i, echoue)| {
            Box::new(Regle {
                index: offset + i,
                echoue: *echoue,
            }) as Box<dyn BusinessValidator<Violation>>
        })
        .collect()
}

proptest! {
    /// Invariant failures are all collected, in declaration order.
    #[test]
    fn invariants_collected_in_order(flags in prop::collection::vec(any::<bool>(), 0..20)) {
        let invariants = build(&flags, 0);
        let expected: Vec<Violation> = flags
            .iter()
            .enumerate()
            .filter(|(_, e)| **e)
            .map(|(i, _)| Violation(i))
            .collect();

        match valider_en_deux_etapes(&[], &invariants) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(failure) => {
                prop_assert!(!failure.is_data_contract());
                prop_assert_eq!(failure.status_codes().len(), expected.len());
                prop_assert_eq!(failure.into_exceptions(), expected);
            }
        }
    }

    /// A data-contract failure reports exactly the first failing contract
    /// rule and hides every invariant.
    #[test]
    fn data_contract_short_circuits(
        contract in prop::collection::vec(any::<bool>(), 1..10),
        invariants in prop::collection::vec(any::<bool>(), 0..10),
    ) {
        let contract_validators = build(&contract, 0);
        let invariant_validators = build(&invariants, 100);
        let first_contract = contract.iter().position(|e| *e);

        let outcome = valider_en_deux_etapes(&contract_validators, &invariant_validators);
        match first_contract {
            Some(i) => prop_assert_eq!(outcome, Err(ValidationFailure::DataContract(Violation(i)))),
            None => {
                let any_invariant = invariants.iter().any(|e| *e);
                prop_assert_eq!(outcome.is_err(), any_invariant);
            }
        }
    }
}

#[test]
fn display_joins_all_messages() {
    let invariants = build(&[true, false, true], 0);
    let failure = valider_en_deux_etapes(&[], &invariants).unwrap_err();
    assert_eq!(
        failure.to_string(),
        "business rules violated: rule 0 violated; rule 2 violated"
    );
}
