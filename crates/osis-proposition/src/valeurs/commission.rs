//! Proximity commission of a doctoral proposition.
//!
//! Which closed set the commission comes from depends on the doctoral
//! committee managing the programme. The three sets have disjoint names,
//! so a persisted name resolves to at most one of them.

use serde::{Deserialize, Serialize};

use crate::enums::{
    ChoixCommissionProximiteCDEouCLSM, ChoixCommissionProximiteCDSS, ChoixSousDomaineSciences,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommissionProximite {
    CdeOuClsm(ChoixCommissionProximiteCDEouCLSM),
    Cdss(ChoixCommissionProximiteCDSS),
    SousDomaineSciences(ChoixSousDomaineSciences),
}

impl CommissionProximite {
    /// Resolve a persisted name against the three sets, in order.
    /// Unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        ChoixCommissionProximiteCDEouCLSM::from_name(name)
            .map(Self::CdeOuClsm)
            .or_else(|| ChoixCommissionProximiteCDSS::from_name(name).map(Self::Cdss))
            .or_else(|| ChoixSousDomaineSciences::from_name(name).map(Self::SousDomaineSciences))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CdeOuClsm(c) => c.name(),
            Self::Cdss(c) => c.name(),
            Self::SousDomaineSciences(c) => c.name(),
        }
    }
}

impl std::fmt::Display for CommissionProximite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
