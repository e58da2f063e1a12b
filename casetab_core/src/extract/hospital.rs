//! Hospital: a name from the hospital list appearing after a "ward" word.
//!
//! Every trigger re-checks the whole hospital list and overwrites the result on
//! each containment hit, so when several names match (one being a substring of
//! another) the one listed last wins, and the last trigger with any hit wins.
//! No attempt is made to pick the longest or closest name.

use crate::extract::{capwords, last_match};
use crate::linguistic::Stemmer;
use crate::lookup::ReferenceList;
use crate::token::{Narrative, join_words};

const TRIGGER_STEM: &str = "ward";

/// Title-cased hospital name, or empty when no trigger finds a listed name.
#[must_use]
pub fn extract_hospital<S>(narrative: &Narrative, hospitals: &ReferenceList, stemmer: &S) -> String
where
    S: Stemmer + ?Sized,
{
    last_match(narrative, |tokens, index| {
        if stemmer.stem(tokens[index].text()) != TRIGGER_STEM {
            return None;
        }
        let remaining = join_words(&tokens[index + 1..]).to_lowercase();
        hospitals
            .iter()
            .rev()
            .find(|name| remaining.contains(name))
            .map(capwords)
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{StemTable, narrative};

    fn hospitals(names: &[&str]) -> ReferenceList {
        names.iter().collect()
    }

    #[test]
    fn warded_at_listed_hospital() {
        let n = narrative(&["he/PRP was/VBD warded/VBN at/IN tan/NN tock/NN seng/NN hospital/NN ./."]);
        let list = hospitals(&["Tan Tock Seng Hospital", "Singapore General Hospital"]);
        assert_eq!(extract_hospital(&n, &list, &StemTable), "Tan Tock Seng Hospital");
    }

    #[test]
    fn no_trigger_means_empty() {
        let n = narrative(&["he/PRP visited/VBD tan/NN tock/NN seng/NN hospital/NN ./."]);
        let list = hospitals(&["Tan Tock Seng Hospital"]);
        assert_eq!(extract_hospital(&n, &list, &StemTable), "");
    }

    #[test]
    fn name_before_trigger_is_ignored() {
        let n = narrative(&["tan/NN tock/NN seng/NN hospital/NN warded/VBD him/PRP ./."]);
        let list = hospitals(&["Tan Tock Seng Hospital"]);
        assert_eq!(extract_hospital(&n, &list, &StemTable), "");
    }

    #[test]
    fn overlapping_names_resolve_to_last_listed() {
        let n = narrative(&["warded/VBN at/IN changi/NN general/JJ hospital/NN ./."]);

        let longer_last = hospitals(&["General Hospital", "Changi General Hospital"]);
        assert_eq!(
            extract_hospital(&n, &longer_last, &StemTable),
            "Changi General Hospital"
        );

        // Same names, reversed order: the shorter name now wins.
        let shorter_last = hospitals(&["Changi General Hospital", "General Hospital"]);
        assert_eq!(extract_hospital(&n, &shorter_last, &StemTable), "General Hospital");
    }

    #[test]
    fn last_trigger_with_a_hit_wins() {
        let n = narrative(&[
            "he/PRP was/VBD warded/VBN at/IN tan/NN tock/NN seng/NN hospital/NN ./.",
            "he/PRP was/VBD later/RB warded/VBN at/IN ncid/NN ./.",
            "the/DT ward/NN was/VBD clean/JJ ./.",
        ]);
        let list = hospitals(&["Tan Tock Seng Hospital", "NCID"]);
        assert_eq!(extract_hospital(&n, &list, &StemTable), "Ncid");
    }

    #[test]
    fn containment_is_substring_not_word() {
        let n = narrative(&["ward/NN at/IN ncidx/NN ./."]);
        let list = hospitals(&["ncid"]);
        assert_eq!(extract_hospital(&n, &list, &StemTable), "Ncid");
    }
}
