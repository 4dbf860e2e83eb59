//! African country directory
//!
//! Static reference table served by `GET /api/countries`. Entries keep the
//! order in which clients display them; do not sort.

use serde::Serialize;

/// One selectable country: lowercase tag, display name and dialing prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub value: &'static str,
    pub label: &'static str,
    pub code: &'static str,
}

const fn country(value: &'static str, label: &'static str, code: &'static str) -> Country {
    Country { value, label, code }
}

pub static AFRICAN_COUNTRIES: [Country; 54] = [
    country("dz", "Algérie", "+213"),
    country("ao", "Angola", "+244"),
    country("bj", "Bénin", "+229"),
    country("bw", "Botswana", "+267"),
    country("bf", "Burkina Faso", "+226"),
    country("bi", "Burundi", "+257"),
    country("cm", "Cameroun", "+237"),
    country("cv", "Cap-Vert", "+238"),
    country("cf", "République centrafricaine", "+236"),
    country("td", "Tchad", "+235"),
    country("km", "Comores", "+269"),
    country("cg", "Congo", "+242"),
    country("cd", "République démocratique du Congo", "+243"),
    country("ci", "Côte d'Ivoire", "+225"),
    country("dj", "Djibouti", "+253"),
    country("eg", "Égypte", "+20"),
    country("gq", "Guinée équatoriale", "+240"),
    country("er", "Érythrée", "+291"),
    country("et", "Éthiopie", "+251"),
    country("ga", "Gabon", "+241"),
    country("gm", "Gambie", "+220"),
    country("gh", "Ghana", "+233"),
    country("gn", "Guinée", "+224"),
    country("gw", "Guinée-Bissau", "+245"),
    country("ke", "Kenya", "+254"),
    country("ls", "Lesotho", "+266"),
    country("lr", "Liberia", "+231"),
    country("ly", "Libye", "+218"),
    country("mg", "Madagascar", "+261"),
    country("mw", "Malawi", "+265"),
    country("ml", "Mali", "+223"),
    country("mr", "Mauritanie", "+222"),
    country("mu", "Maurice", "+230"),
    country("ma", "Maroc", "+212"),
    country("mz", "Mozambique", "+258"),
    country("na", "Namibie", "+264"),
    country("ne", "Niger", "+227"),
    country("ng", "Nigeria", "+234"),
    country("rw", "Rwanda", "+250"),
    country("st", "Sao Tomé-et-Principe", "+239"),
    country("sn", "Sénégal", "+221"),
    country("sc", "Seychelles", "+248"),
    country("sl", "Sierra Leone", "+232"),
    country("so", "Somalie", "+252"),
    country("za", "Afrique du Sud", "+27"),
    country("ss", "Soudan du Sud", "+211"),
    country("sd", "Soudan", "+249"),
    country("sz", "Eswatini", "+268"),
    country("tz", "Tanzanie", "+255"),
    country("tg", "Togo", "+228"),
    country("tn", "Tunisie", "+216"),
    country("ug", "Ouganda", "+256"),
    country("zm", "Zambie", "+260"),
    country("zw", "Zimbabwe", "+263"),
];

/// The full directory in display order.
pub fn african_countries() -> &'static [Country] {
    &AFRICAN_COUNTRIES
}

/// Look up a country by its lowercase tag.
pub fn find_country(value: &str) -> Option<&'static Country> {
    AFRICAN_COUNTRIES.iter().find(|c| c.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_directory_has_54_entries() {
        assert_eq!(african_countries().len(), 54);
    }

    #[test]
    fn test_entries_are_well_formed() {
        for c in african_countries() {
            assert!(!c.value.is_empty());
            assert!(!c.label.is_empty());
            assert!(c.code.starts_with('+'), "bad prefix for {}", c.value);
            assert!(c.code.len() > 1);
            assert!(c.code[1..].chars().all(|ch| ch.is_ascii_digit()));
            assert_eq!(c.value, c.value.to_lowercase());
        }
    }

    #[test]
    fn test_values_are_unique() {
        let values: HashSet<_> = african_countries().iter().map(|c| c.value).collect();
        assert_eq!(values.len(), 54);
    }

    #[test]
    fn test_order_is_definition_order() {
        let dir = african_countries();
        assert_eq!(dir[0], country("dz", "Algérie", "+213"));
        assert_eq!(dir[8].label, "République centrafricaine");
        assert_eq!(dir[53], country("zw", "Zimbabwe", "+263"));
    }

    #[test]
    fn test_find_country() {
        let senegal = find_country("sn").expect("senegal is listed");
        assert_eq!(senegal.label, "Sénégal");
        assert_eq!(senegal.code, "+221");
        assert_eq!(find_country("ci").map(|c| c.label), Some("Côte d'Ivoire"));
        assert!(find_country("fr").is_none());
    }
}
