//! Nationality: `<country> citizen` and `<country> permanent resident`.

use crate::extract::last_match;
use crate::lookup::ReferenceList;
use crate::token::{Narrative, Token};

const PR_SUFFIX: &str = " PR";

/// Upper-cased country of the last citizenship or residency statement,
/// suffixed with `" PR"` for permanent residents. Empty when nothing matches.
#[must_use]
pub fn extract_nationality(narrative: &Narrative, countries: &ReferenceList) -> String {
    last_match(narrative, |tokens, index| {
        nationality_at(tokens, index, countries)
    })
    .unwrap_or_default()
}

fn nationality_at(tokens: &[Token], index: usize, countries: &ReferenceList) -> Option<String> {
    let country = countries.resolve(tokens.get(index.checked_sub(1)?)?.text())?;
    match tokens[index].text() {
        "citizen" => Some(country.to_uppercase()),
        "permanent" if tokens.get(index + 1).is_some_and(|next| next.text() == "resident") => {
            Some(country.to_uppercase() + PR_SUFFIX)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::narrative;

    fn countries() -> ReferenceList {
        let mut list = ReferenceList::new();
        list.insert_with_aliases("Malaysia", ["Malaysian"]);
        list.insert_with_aliases("Korea", ["Korean"]);
        list.insert("Singapore");
        list
    }

    #[test]
    fn citizen_pattern_via_demonym() {
        let n = narrative(&["he/PRP is/VBZ a/DT malaysian/JJ citizen/NN ./."]);
        assert_eq!(extract_nationality(&n, &countries()), "MALAYSIA");
    }

    #[test]
    fn citizen_pattern_via_country_name() {
        let n = narrative(&["he/PRP is/VBZ a/DT singapore/NN citizen/NN ./."]);
        assert_eq!(extract_nationality(&n, &countries()), "SINGAPORE");
    }

    #[test]
    fn permanent_resident_pattern() {
        let n = narrative(&["she/PRP is/VBZ a/DT korean/JJ permanent/JJ resident/NN ./."]);
        assert_eq!(extract_nationality(&n, &countries()), "KOREA PR");
    }

    #[test]
    fn unknown_country_does_not_match() {
        let n = narrative(&["he/PRP is/VBZ a/DT martian/JJ citizen/NN ./."]);
        assert_eq!(extract_nationality(&n, &countries()), "");
    }

    #[test]
    fn membership_is_exact_word() {
        let n = narrative(&["a/DT malay/NN citizen/NN ./."]);
        assert_eq!(extract_nationality(&n, &countries()), "");
    }

    #[test]
    fn permanent_without_resident_does_not_match() {
        let n = narrative(&["a/DT korean/JJ permanent/JJ"]);
        assert_eq!(extract_nationality(&n, &countries()), "");
    }

    #[test]
    fn last_statement_wins() {
        let n = narrative(&[
            "he/PRP is/VBZ a/DT singapore/NN citizen/NN ./.",
            "his/PRP$ wife/NN is/VBZ a/DT korean/JJ permanent/JJ resident/NN ./.",
        ]);
        assert_eq!(extract_nationality(&n, &countries()), "KOREA PR");
    }
}
