//! Value objects held by, or passed to, the proposition aggregate.

pub mod commission;
pub mod comptabilite;
pub mod projet;
pub mod references;

pub use commission::CommissionProximite;
pub use comptabilite::{ChampRequis, Comptabilite};
pub use projet::{DetailProjet, ExperiencePrecedenteRecherche, Financement};
pub use references::{
    ComplementFormationIdentity, ConditionComplementaireIdentity, ConditionComplementaireLibre,
    Doctorat, EmplacementDocument, MotifRefusIdentity, TitreAccesSelectionnable,
    TypeTitreAccesSelectionnable,
};
