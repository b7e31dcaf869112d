//! # JSON File Store
//!
//! One pretty-printed JSON file per proposition, named after its
//! identity, in the configured state directory. Writes go through a
//! temporary file and a rename so a crashed write never leaves a
//! truncated proposition behind.

use std::path::{Path, PathBuf};

use osis_core::PropositionIdentity;
use osis_proposition::{PortError, Proposition, PropositionRepository};

#[derive(Debug, Clone)]
pub struct JsonPropositionStore {
    dir: PathBuf,
}

impl JsonPropositionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn chemin(&self, entity_id: &PropositionIdentity) -> PathBuf {
        self.dir.join(format!("{entity_id}.json"))
    }
}

impl PropositionRepository for JsonPropositionStore {
    fn get(&self, entity_id: &PropositionIdentity) -> Result<Option<Proposition>, PortError> {
        let chemin = self.chemin(entity_id);
        if !chemin.is_file() {
            return Ok(None);
        }
        let contenu = std::fs::read_to_string(&chemin)?;
        Ok(Some(serde_json::from_str(&contenu)?))
    }

    fn save(&self, proposition: &Proposition) -> Result<(), PortError> {
        std::fs::create_dir_all(&self.dir)?;
        let chemin = self.chemin(proposition.entity_id());
        let temporaire = chemin.with_extension("json.tmp");
        std::fs::write(&temporaire, serde_json::to_string_pretty(proposition)?)?;
        std::fs::rename(&temporaire, &chemin)?;
        Ok(())
    }

    fn search(&self, matricule_candidat: Option<&str>) -> Result<Vec<Proposition>, PortError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut propositions = Vec::new();
        for entry in std::fs::read_dir(&self.dir)?.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let contenu = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<Proposition>(&contenu) {
                Ok(p) => propositions.push(p),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable proposition");
                }
            }
        }

        propositions.retain(|p| matricule_candidat.map_or(true, |m| p.matricule_candidat() == m));
        propositions.sort_by_key(Proposition::reference);
        Ok(propositions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osis_core::{FormationIdentity, Timestamp};
    use osis_proposition::enums::ChoixTypeAdmission;
    use osis_proposition::valeurs::Doctorat;
    use osis_proposition::NouvelleProposition;

    fn make_proposition(uuid: &str, reference: u64, matricule: &str) -> Proposition {
        Proposition::initier(
            PropositionIdentity::from_string(uuid),
            NouvelleProposition {
                reference,
                matricule_candidat: matricule.into(),
                type_admission: ChoixTypeAdmission::Admission,
                justification: None,
                commission_proximite: Some("ECONOMY".into()),
            },
            &Doctorat::new(FormationIdentity::new("ECGE3DP", 2024), "Economics", "CDE"),
            Timestamp::from_ymd(2024, 3, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_save_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPropositionStore::new(dir.path().join("propositions"));
        let p = make_proposition("a", 1, "0123");

        store.save(&p).unwrap();

        assert_eq!(store.get(p.entity_id()).unwrap(), Some(p));
        assert!(!dir.path().join("propositions").join("a.json.tmp").exists());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPropositionStore::new(dir.path());
        assert_eq!(store.get(&PropositionIdentity::from_string("nope")).unwrap(), None);
    }

    #[test]
    fn test_search_orders_by_reference_and_skips_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPropositionStore::new(dir.path());
        store.save(&make_proposition("b", 2, "0123")).unwrap();
        store.save(&make_proposition("a", 1, "0123")).unwrap();
        store.save(&make_proposition("c", 3, "9999")).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let references: Vec<_> = store
            .search(None)
            .unwrap()
            .iter()
            .map(Proposition::reference)
            .collect();
        assert_eq!(references, vec![1, 2, 3]);
        assert_eq!(store.search(Some("9999")).unwrap().len(), 1);
        assert_eq!(store.prochaine_reference().unwrap(), 4);
    }

    #[test]
    fn test_search_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPropositionStore::new(dir.path().join("absent"));
        assert!(store.search(None).unwrap().is_empty());
    }
}
