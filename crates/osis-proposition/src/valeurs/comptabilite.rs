//! # Accounting Information
//!
//! Debt certificate, Belgian student status ("assimilation"),
//! affiliations, and refund bank account. Document fields hold opaque
//! storage handles.
//!
//! The assimilation block is a dependency tree: the chosen situation
//! type makes a sub-type required, the sub-type makes some documents
//! required, and so on. [`Comptabilite::champs_assimilation_requis`]
//! walks that tree.

use serde::{Deserialize, Serialize};

use crate::enums::{
    ChoixAffiliationSport, ChoixAssimilation1, ChoixAssimilation2, ChoixAssimilation3,
    ChoixAssimilation5, ChoixAssimilation6, ChoixTypeCompteBancaire, LienParente,
    TypeSituationAssimilation,
};

/// Accounting block of a doctoral proposition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comptabilite {
    pub attestation_absence_dette_etablissement: Vec<String>,

    pub type_situation_assimilation: Option<TypeSituationAssimilation>,

    pub sous_type_situation_assimilation_1: Option<ChoixAssimilation1>,
    pub carte_resident_longue_duree: Vec<String>,
    pub carte_cire_sejour_illimite_etranger: Vec<String>,
    pub carte_sejour_membre_ue: Vec<String>,
    pub carte_sejour_permanent_membre_ue: Vec<String>,

    pub sous_type_situation_assimilation_2: Option<ChoixAssimilation2>,
    pub carte_a_b_refugie: Vec<String>,
    pub annexe_25_26_refugies_apatrides: Vec<String>,
    pub attestation_immatriculation: Vec<String>,
    pub preuve_statut_apatride: Vec<String>,
    pub carte_a_b: Vec<String>,
    pub decision_protection_subsidiaire: Vec<String>,
    pub decision_protection_temporaire: Vec<String>,
    pub carte_a: Vec<String>,

    pub sous_type_situation_assimilation_3: Option<ChoixAssimilation3>,
    pub titre_sejour_3_mois_professionel: Vec<String>,
    pub fiches_remuneration: Vec<String>,
    pub titre_sejour_3_mois_remplacement: Vec<String>,
    pub preuve_allocations_chomage_pension_indemnite: Vec<String>,

    pub attestation_cpas: Vec<String>,

    pub relation_parente: Option<LienParente>,
    pub sous_type_situation_assimilation_5: Option<ChoixAssimilation5>,
    pub composition_menage_acte_naissance: Vec<String>,
    pub acte_tutelle: Vec<String>,
    pub composition_menage_acte_mariage: Vec<String>,
    pub attestation_cohabitation_legale: Vec<String>,
    pub carte_identite_parent: Vec<String>,
    pub titre_sejour_longue_duree_parent: Vec<String>,
    pub annexe_25_26_refugies_apatrides_decision_protection_parent: Vec<String>,
    pub titre_sejour_3_mois_parent: Vec<String>,
    pub fiches_remuneration_parent: Vec<String>,
    pub attestation_cpas_parent: Vec<String>,

    pub sous_type_situation_assimilation_6: Option<ChoixAssimilation6>,
    pub decision_bourse_cfwb: Vec<String>,
    pub attestation_boursier: Vec<String>,

    pub titre_identite_sejour_longue_duree_ue: Vec<String>,
    pub titre_sejour_belgique: Vec<String>,

    pub affiliation_sport: Option<ChoixAffiliationSport>,
    pub etudiant_solidaire: Option<bool>,

    pub type_numero_compte: Option<ChoixTypeCompteBancaire>,
    pub numero_compte_iban: Option<String>,
    pub iban_valide: Option<bool>,
    pub numero_compte_autre_format: Option<String>,
    pub code_bic_swift_banque: Option<String>,
    pub prenom_titulaire_compte: Option<String>,
    pub nom_titulaire_compte: Option<String>,
}

/// One required assimilation field and whether it is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChampRequis {
    pub nom: &'static str,
    pub rempli: bool,
}

fn champ(nom: &'static str, valeur: &[String]) -> ChampRequis {
    ChampRequis {
        nom,
        rempli: !valeur.is_empty(),
    }
}

fn choix<T>(nom: &'static str, valeur: &Option<T>) -> ChampRequis {
    ChampRequis {
        nom,
        rempli: valeur.is_some(),
    }
}

impl Comptabilite {
    /// The "nothing filled in" sentinel.
    pub fn non_remplie() -> Self {
        Self::default()
    }

    /// Fields required by the chosen assimilation situation, following
    /// the dependency tree from the situation type down. Empty when no
    /// situation type is chosen.
    pub fn champs_assimilation_requis(&self) -> Vec<ChampRequis> {
        use TypeSituationAssimilation as T;

        let Some(situation) = self.type_situation_assimilation else {
            return Vec::new();
        };

        let mut requis = Vec::new();
        match situation {
            T::AutorisationEtablissementOuResidentLongueDuree => {
                requis.push(choix("sous_type_situation_assimilation_1", &self.sous_type_situation_assimilation_1));
                requis.extend(self.requis_assimilation_1());
            }
            T::RefugieOuApatrideOuProtectionSubsidiaireTemporaire => {
                requis.push(choix("sous_type_situation_assimilation_2", &self.sous_type_situation_assimilation_2));
                requis.extend(self.requis_assimilation_2());
            }
            T::AutorisationSejourEtRevenusProfessionnelsOuRemplacement => {
                requis.push(choix("sous_type_situation_assimilation_3", &self.sous_type_situation_assimilation_3));
                requis.extend(self.requis_assimilation_3());
            }
            T::PrisEnChargeOuDesigneCpas => {
                requis.push(champ("attestation_cpas", &self.attestation_cpas));
            }
            T::ProcheANationaliteUeOuRespecteAssimilations1A4 => {
                requis.push(choix("relation_parente", &self.relation_parente));
                requis.push(choix("sous_type_situation_assimilation_5", &self.sous_type_situation_assimilation_5));
                requis.extend(self.requis_relation_parente());
                requis.extend(self.requis_assimilation_5());
            }
            T::ABourseArticle105Paragraph2 => {
                requis.push(choix("sous_type_situation_assimilation_6", &self.sous_type_situation_assimilation_6));
                requis.extend(self.requis_assimilation_6());
            }
            T::ResidentLongueDureeUeHorsBelgique => {
                requis.push(champ(
                    "titre_identite_sejour_longue_duree_ue",
                    &self.titre_identite_sejour_longue_duree_ue,
                ));
                requis.push(champ("titre_sejour_belgique", &self.titre_sejour_belgique));
            }
            T::AucuneAssimilation => {}
        }
        requis
    }

    fn requis_assimilation_1(&self) -> Vec<ChampRequis> {
        use ChoixAssimilation1 as A;
        match self.sous_type_situation_assimilation_1 {
            Some(A::TitulaireCarteResidentLongueDuree) => {
                vec![champ("carte_resident_longue_duree", &self.carte_resident_longue_duree)]
            }
            Some(A::TitulaireCarteEtranger) => vec![champ(
                "carte_cire_sejour_illimite_etranger",
                &self.carte_cire_sejour_illimite_etranger,
            )],
            Some(A::TitulaireCarteSejourMembreUe) => {
                vec![champ("carte_sejour_membre_ue", &self.carte_sejour_membre_ue)]
            }
            Some(A::TitulaireCarteSejourPermanentMembreUe) => vec![champ(
                "carte_sejour_permanent_membre_ue",
                &self.carte_sejour_permanent_membre_ue,
            )],
            None => Vec::new(),
        }
    }

    fn requis_assimilation_2(&self) -> Vec<ChampRequis> {
        use ChoixAssimilation2 as A;
        match self.sous_type_situation_assimilation_2 {
            Some(A::Refugie) => vec![champ("carte_a_b_refugie", &self.carte_a_b_refugie)],
            Some(A::DemandeurAsile) => vec![
                champ("annexe_25_26_refugies_apatrides", &self.annexe_25_26_refugies_apatrides),
                champ("attestation_immatriculation", &self.attestation_immatriculation),
            ],
            Some(A::ProtectionSubsidiaire) => vec![
                champ("carte_a_b", &self.carte_a_b),
                champ("decision_protection_subsidiaire", &self.decision_protection_subsidiaire),
            ],
            Some(A::ProtectionTemporaire) => vec![champ(
                "decision_protection_temporaire",
                &self.decision_protection_temporaire,
            )],
            None => Vec::new(),
        }
    }

    fn requis_assimilation_3(&self) -> Vec<ChampRequis> {
        use ChoixAssimilation3 as A;
        match self.sous_type_situation_assimilation_3 {
            Some(A::AutorisationSejourEtRevenusProfessionnels) => vec![
                champ("titre_sejour_3_mois_professionel", &self.titre_sejour_3_mois_professionel),
                champ("fiches_remuneration", &self.fiches_remuneration),
            ],
            Some(A::AutorisationSejourEtRevenusDeRemplacement) => vec![
                champ("titre_sejour_3_mois_remplacement", &self.titre_sejour_3_mois_remplacement),
                champ(
                    "preuve_allocations_chomage_pension_indemnite",
                    &self.preuve_allocations_chomage_pension_indemnite,
                ),
            ],
            None => Vec::new(),
        }
    }

    fn requis_relation_parente(&self) -> Vec<ChampRequis> {
        use LienParente as L;
        match self.relation_parente {
            Some(L::Pere | L::Mere) => vec![champ(
                "composition_menage_acte_naissance",
                &self.composition_menage_acte_naissance,
            )],
            Some(L::TuteurLegal) => vec![champ("acte_tutelle", &self.acte_tutelle)],
            Some(L::Conjoint) => vec![champ(
                "composition_menage_acte_mariage",
                &self.composition_menage_acte_mariage,
            )],
            Some(L::CohabitantLegal) => vec![champ(
                "attestation_cohabitation_legale",
                &self.attestation_cohabitation_legale,
            )],
            None => Vec::new(),
        }
    }

    fn requis_assimilation_5(&self) -> Vec<ChampRequis> {
        use ChoixAssimilation5 as A;
        match self.sous_type_situation_assimilation_5 {
            Some(A::ANationaliteUe) => {
                vec![champ("carte_identite_parent", &self.carte_identite_parent)]
            }
            Some(A::TitulaireTitreSejourLongueDuree) => vec![champ(
                "titre_sejour_longue_duree_parent",
                &self.titre_sejour_longue_duree_parent,
            )],
            Some(A::CandidateRefugieOuRefugieOuApatrideOuProtectionSubsidiaireTemporaire) => {
                vec![champ(
                    "annexe_25_26_refugies_apatrides_decision_protection_parent",
                    &self.annexe_25_26_refugies_apatrides_decision_protection_parent,
                )]
            }
            Some(A::AutorisationSejourEtRevenusProfessionnelsOuRemplacement) => vec![
                champ("titre_sejour_3_mois_parent", &self.titre_sejour_3_mois_parent),
                champ("fiches_remuneration_parent", &self.fiches_remuneration_parent),
            ],
            Some(A::PrisEnChargeOuDesigneCpas) => {
                vec![champ("attestation_cpas_parent", &self.attestation_cpas_parent)]
            }
            None => Vec::new(),
        }
    }

    fn requis_assimilation_6(&self) -> Vec<ChampRequis> {
        use ChoixAssimilation6 as A;
        match self.sous_type_situation_assimilation_6 {
            Some(A::ABourseEtudesCommunauteFrancaise) => {
                vec![champ("decision_bourse_cfwb", &self.decision_bourse_cfwb)]
            }
            Some(A::ABourseCooperationDeveloppement) => {
                vec![champ("attestation_boursier", &self.attestation_boursier)]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noms_manquants(c: &Comptabilite) -> Vec<&'static str> {
        c.champs_assimilation_requis()
            .into_iter()
            .filter(|champ| !champ.rempli)
            .map(|champ| champ.nom)
            .collect()
    }

    #[test]
    fn test_no_situation_requires_nothing() {
        assert!(Comptabilite::non_remplie().champs_assimilation_requis().is_empty());
    }

    #[test]
    fn test_situation_requires_sub_type() {
        let c = Comptabilite {
            type_situation_assimilation: Some(
                TypeSituationAssimilation::RefugieOuApatrideOuProtectionSubsidiaireTemporaire,
            ),
            ..Comptabilite::default()
        };
        assert_eq!(noms_manquants(&c), vec!["sous_type_situation_assimilation_2"]);
    }

    #[test]
    fn test_sub_type_requires_its_documents() {
        let c = Comptabilite {
            type_situation_assimilation: Some(
                TypeSituationAssimilation::RefugieOuApatrideOuProtectionSubsidiaireTemporaire,
            ),
            sous_type_situation_assimilation_2: Some(ChoixAssimilation2::DemandeurAsile),
            attestation_immatriculation: vec!["doc".into()],
            ..Comptabilite::default()
        };
        assert_eq!(noms_manquants(&c), vec!["annexe_25_26_refugies_apatrides"]);
    }

    #[test]
    fn test_relative_branch_follows_both_children() {
        let c = Comptabilite {
            type_situation_assimilation: Some(
                TypeSituationAssimilation::ProcheANationaliteUeOuRespecteAssimilations1A4,
            ),
            relation_parente: Some(LienParente::Mere),
            sous_type_situation_assimilation_5: Some(ChoixAssimilation5::ANationaliteUe),
            ..Comptabilite::default()
        };
        assert_eq!(
            noms_manquants(&c),
            vec!["composition_menage_acte_naissance", "carte_identite_parent"]
        );
    }

    #[test]
    fn test_aucune_assimilation_requires_nothing() {
        let c = Comptabilite {
            type_situation_assimilation: Some(TypeSituationAssimilation::AucuneAssimilation),
            ..Comptabilite::default()
        };
        assert!(c.champs_assimilation_requis().is_empty());
    }
}
