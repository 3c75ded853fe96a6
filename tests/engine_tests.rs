//! Behavioral tests for the sandhi rule engine: the four junction
//! rules, their precedence, the empty-input short-circuits, and the
//! surface-level explain heuristics.

use sandhika::SandhiEngine;

fn engine() -> SandhiEngine {
    SandhiEngine::new()
}

fn matched_id(result: &sandhika::SandhiResult) -> Option<&'static str> {
    result.matched_rule.map(|r| r.id)
}

#[cfg(test)]
mod savarna_dirgha_tests {
    use super::*;

    #[test]
    fn a_plus_long_a_merges_to_long_a() {
        let result = engine().apply("देव", "आलय");
        assert_eq!(result.modified, "देवालय");
        assert_eq!(matched_id(&result), Some("6.1.101"));
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.original, "देव + आलय");
    }

    #[test]
    fn a_plus_a_merges_to_long_a() {
        let result = engine().apply("अ", "अग्नि");
        assert_eq!(result.modified, "आग्नि");
        assert_eq!(matched_id(&result), Some("6.1.101"));
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn long_a_plus_long_a() {
        let result = engine().apply("महा", "आत्मा");
        assert_eq!(result.modified, "महात्मा");
        assert_eq!(matched_id(&result), Some("6.1.101"));
    }

    #[test]
    fn i_plus_i_merges_to_long_i() {
        let result = engine().apply("मुनि", "इति");
        assert_eq!(result.modified, "मुनीति");
        assert_eq!(matched_id(&result), Some("6.1.101"));
    }
}

#[cfg(test)]
mod vrddhi_tests {
    use super::*;

    #[test]
    fn a_plus_e_merges_to_ai() {
        let result = engine().apply("देव", "एव");
        assert_eq!(result.modified, "देवैव");
        assert_eq!(matched_id(&result), Some("6.1.88"));
    }

    #[test]
    fn long_a_plus_o_merges_to_au() {
        let result = engine().apply("महा", "ओजः");
        assert_eq!(result.modified, "महौजः");
        assert_eq!(matched_id(&result), Some("6.1.88"));
    }
}

#[cfg(test)]
mod guna_tests {
    use super::*;

    #[test]
    fn a_plus_i_merges_to_e() {
        let result = engine().apply("अ", "इन्द्रः");
        assert_eq!(result.modified, "एन्द्रः");
        assert_eq!(matched_id(&result), Some("6.1.87"));
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn a_plus_long_i_merges_to_e() {
        let result = engine().apply("देव", "ईश्वरः");
        assert_eq!(result.modified, "देवेश्वरः");
        assert_eq!(matched_id(&result), Some("6.1.87"));
    }

    #[test]
    fn a_plus_u_merges_to_o() {
        let result = engine().apply("सूर्य", "उदय");
        assert_eq!(result.modified, "सूर्योदय");
        assert_eq!(matched_id(&result), Some("6.1.87"));
    }

    #[test]
    fn long_a_plus_vocalic_r_becomes_ar() {
        let result = engine().apply("महा", "ऋषि");
        assert_eq!(result.modified, "महर्षि");
        assert_eq!(matched_id(&result), Some("6.1.87"));
    }
}

#[cfg(test)]
mod yan_tests {
    use super::*;

    #[test]
    fn i_before_dissimilar_vowel_becomes_y() {
        let result = engine().apply("इति", "आदि");
        assert_eq!(result.modified, "इत्यादि");
        assert_eq!(matched_id(&result), Some("6.1.77"));
    }

    #[test]
    fn u_before_dissimilar_vowel_becomes_v() {
        let result = engine().apply("मधु", "अरिः");
        assert_eq!(result.modified, "मध्वरिः");
        assert_eq!(matched_id(&result), Some("6.1.77"));
    }
}

#[cfg(test)]
mod precedence_tests {
    use super::*;

    #[test]
    fn savarna_outranks_yan_on_similar_vowels() {
        // i + i satisfies both the lengthening trigger and the glide
        // trigger; lengthening must win.
        let result = engine().apply("मुनि", "इति");
        assert_eq!(matched_id(&result), Some("6.1.101"));
    }

    #[test]
    fn determinism() {
        let e = engine();
        assert_eq!(e.apply("देव", "आलय"), e.apply("देव", "आलय"));
        assert_eq!(e.apply("क", "त"), e.apply("क", "त"));
    }
}

#[cfg(test)]
mod no_rule_tests {
    use super::*;

    #[test]
    fn consonant_boundary_matches_nothing() {
        let result = engine().apply("क", "त");
        assert_eq!(result.modified, "क त");
        assert_eq!(result.matched_rule, None);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn diphthong_boundary_matches_nothing() {
        // e + e: same place, but neither side is a simple vowel.
        let result = engine().apply("देवे", "एव");
        assert_eq!(result.matched_rule, None);
        assert_eq!(result.confidence, 0.0);
    }
}

#[cfg(test)]
mod short_circuit_tests {
    use super::*;

    #[test]
    fn empty_first_term() {
        let result = engine().apply("", "अग्नि");
        assert_eq!(result.modified, "अग्नि");
        assert_eq!(result.matched_rule, None);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn empty_second_term() {
        let result = engine().apply("देव", "   ");
        assert_eq!(result.modified, "देव");
        assert_eq!(result.matched_rule, None);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn terms_are_trimmed() {
        let result = engine().apply("  देव ", " आलय  ");
        assert_eq!(result.original, "देव + आलय");
        assert_eq!(result.modified, "देवालय");
    }

    #[test]
    fn unrecognized_term_decomposes_to_nothing() {
        let result = engine().apply("123", "देव");
        assert_eq!(result.modified, "123देव");
        assert_eq!(result.matched_rule, None);
        assert_eq!(result.confidence, 1.0);
    }
}

#[cfg(test)]
mod explain_tests {
    use super::*;

    #[test]
    fn long_vowel_suggests_lengthening() {
        let hints = engine().explain("काल");
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("6.1.101"));
    }

    #[test]
    fn hints_fire_independently_in_fixed_order() {
        // Contains both a glide cluster and a long-vowel sign.
        let hints = engine().explain("इत्यादि");
        assert_eq!(hints.len(), 2);
        assert!(hints[0].contains("6.1.77"));
        assert!(hints[1].contains("6.1.101"));
    }

    #[test]
    fn e_vowel_suggests_guna() {
        let hints = engine().explain("देवेन्द्रः");
        assert!(hints.iter().any(|h| h.contains("6.1.87")));
    }

    #[test]
    fn plain_text_yields_no_hints() {
        assert!(engine().explain("कखग").is_empty());
        assert!(engine().explain("").is_empty());
    }
}

#[cfg(test)]
mod rules_tests {
    use super::*;

    #[test]
    fn four_rules_in_canonical_order() {
        let ids: Vec<&str> = engine().rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, ["6.1.77", "6.1.87", "6.1.88", "6.1.101"]);
    }
}
