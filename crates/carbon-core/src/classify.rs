//! Land-cover classifier: maps a raw feature's type name and/or code onto
//! exactly one [`LandUseCategory`].
//!
//! Evaluation is an ordered, first-match-wins cascade:
//!   1. name keyword rules (free text outranks coded evidence),
//!   2. single-letter code prefixes,
//!   3. leading-digit codes,
//!   4. Grassland fallback.
//!
//! Two precedence choices are load-bearing and must not be reordered:
//! wetland keywords are tested before agricultural ones (so "하천습지"
//! never lands in the looser agricultural bucket), and generic
//! urbanized/built-up terms map to Residential, never Industrial, since an
//! "시가화건조지" label says nothing about heavy industry.

use crate::feature::RawLandCoverFeature;
use crate::taxonomy::LandUseCategory;

/// Ordered name-keyword rule table. Substring match, case-insensitive.
/// The first group containing a matching keyword decides the category;
/// later groups are not evaluated.
const NAME_RULES: &[(&[&str], LandUseCategory)] = &[
    (
        &["산림", "침엽수", "활엽수", "혼효림", "관목", "수림", "forest", "woodland"],
        LandUseCategory::Forest,
    ),
    (
        &["초지", "녹지", "공원", "잔디", "grassland", "meadow", "park", "green space"],
        LandUseCategory::Grassland,
    ),
    // Before agricultural: wetland terms are the more specific signal and
    // must not be swallowed by a looser farming rule.
    (
        &["습지", "하천", "호소", "저수지", "수면", "갯벌", "wetland", "river", "marsh", "water"],
        LandUseCategory::Wetland,
    ),
    (
        &["농경", "경작", "논", "밭", "과수원", "농업", "agricult", "farmland", "paddy", "orchard"],
        LandUseCategory::Agricultural,
    ),
    // Generic built-up terms: Residential, never Industrial.
    (
        &["시가화", "건조지", "시가지", "urbanized", "built-up"],
        LandUseCategory::Residential,
    ),
    (
        &["주거", "주택", "residential", "housing"],
        LandUseCategory::Residential,
    ),
    (
        &["상업", "업무", "commercial", "office"],
        LandUseCategory::Commercial,
    ),
    (
        &["공업", "산업", "공장", "industrial", "factory"],
        LandUseCategory::Industrial,
    ),
];

/// Code-prefix table covering the platform's biotop large-class letters:
/// `A`/`F` forest classes, `B`/`G` grass, `H`/`W` water-side, `E`
/// cultivated, `U` urbanized/built-up (→ Residential, same rationale as
/// the name rule), `R`/`C`/`I` residential/commercial/industrial.
const LETTER_RULES: &[(char, LandUseCategory)] = &[
    ('A', LandUseCategory::Forest),
    ('F', LandUseCategory::Forest),
    ('B', LandUseCategory::Grassland),
    ('G', LandUseCategory::Grassland),
    ('H', LandUseCategory::Wetland),
    ('W', LandUseCategory::Wetland),
    ('E', LandUseCategory::Agricultural),
    ('U', LandUseCategory::Residential),
    ('R', LandUseCategory::Residential),
    ('C', LandUseCategory::Commercial),
    ('I', LandUseCategory::Industrial),
];

/// Leading-digit table for purely numeric type codes, mirroring the
/// canonical category order.
const DIGIT_RULES: &[(char, LandUseCategory)] = &[
    ('1', LandUseCategory::Forest),
    ('2', LandUseCategory::Grassland),
    ('3', LandUseCategory::Agricultural),
    ('4', LandUseCategory::Wetland),
    ('5', LandUseCategory::Residential),
    ('6', LandUseCategory::Commercial),
    ('7', LandUseCategory::Industrial),
];

/// Classify a feature by type name and/or code. Total: always returns a
/// category, falling back to Grassland when nothing matches.
pub fn classify(code: &str, name: &str) -> LandUseCategory {
    if let Some(cat) = match_name(name) {
        return cat;
    }
    if let Some(cat) = match_code(code) {
        return cat;
    }
    LandUseCategory::Grassland
}

/// Classify a normalized feature record.
pub fn classify_feature(feature: &RawLandCoverFeature) -> LandUseCategory {
    classify(&feature.code, &feature.name)
}

fn match_name(name: &str) -> Option<LandUseCategory> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }
    for (keywords, category) in NAME_RULES {
        if keywords.iter().any(|kw| name.contains(kw)) {
            return Some(*category);
        }
    }
    None
}

fn match_code(code: &str) -> Option<LandUseCategory> {
    let first = code.trim().chars().next()?;
    let letter = first.to_ascii_uppercase();
    if let Some((_, cat)) = LETTER_RULES.iter().find(|(c, _)| *c == letter) {
        return Some(*cat);
    }
    if let Some((_, cat)) = DIGIT_RULES.iter().find(|(c, _)| *c == first) {
        return Some(*cat);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use LandUseCategory::*;

    /// A forest name outranks an industrial code letter.
    #[test]
    fn name_rule_outranks_code_rule() {
        assert_eq!(classify("I1", "자연산림"), Forest);
        assert_eq!(classify("C3", "낙엽활엽수림"), Forest);
    }

    /// Empty name falls through to the code-letter table; `A` is the
    /// biotop forest class, not the simulator's agricultural display code.
    #[test]
    fn code_letter_used_when_name_absent() {
        assert_eq!(classify("A", ""), Forest);
        assert_eq!(classify("F2", ""), Forest);
        assert_eq!(classify("E1", ""), Agricultural);
        assert_eq!(classify("w1", "  "), Wetland);
        assert_eq!(classify("I2", ""), Industrial);
    }

    /// Urbanized/built-up labels classify as Residential, never Industrial.
    #[test]
    fn urbanized_maps_to_residential() {
        assert_eq!(classify("", "시가화건조지"), Residential);
        assert_eq!(classify("I9", "시가화건조지"), Residential);
        assert_eq!(classify("U3", ""), Residential);
    }

    /// Wetland keywords are tested before agricultural ones.
    #[test]
    fn wetland_checked_before_agricultural() {
        // "하천" (river) must not be pulled into the agricultural bucket.
        assert_eq!(classify("", "하천변 경작지"), Wetland);
        assert_eq!(classify("", "호소습지"), Wetland);
    }

    /// Agricultural names classify correctly on their own.
    #[test]
    fn agricultural_names() {
        assert_eq!(classify("", "논"), Agricultural);
        assert_eq!(classify("", "과수원"), Agricultural);
        assert_eq!(classify("", "경작지"), Agricultural);
    }

    /// English keywords match case-insensitively.
    #[test]
    fn english_keywords_case_insensitive() {
        assert_eq!(classify("", "Deciduous FOREST"), Forest);
        assert_eq!(classify("", "Commercial district"), Commercial);
        assert_eq!(classify("", "URBANIZED area"), Residential);
    }

    /// Numeric codes use the leading-digit table.
    #[test]
    fn numeric_code_rules() {
        assert_eq!(classify("110", ""), Forest);
        assert_eq!(classify("42", ""), Wetland);
        assert_eq!(classify("7", ""), Industrial);
    }

    /// Nothing matching at all yields the documented Grassland fallback.
    #[test]
    fn fallback_is_grassland() {
        assert_eq!(classify("", ""), Grassland);
        assert_eq!(classify("Z9", "???"), Grassland);
        assert_eq!(classify("99", ""), Grassland);
    }

    /// First matching keyword group wins over later groups.
    #[test]
    fn first_matching_group_wins() {
        // Contains both a grassland keyword (녹지) and a residential one
        // (주거); grassland is the earlier tier.
        assert_eq!(classify("", "주거지 조경녹지"), Grassland);
    }

    /// The letter table covers both letters of every doubled class.
    #[test]
    fn letter_table_aliases() {
        assert_eq!(classify("B2", ""), Grassland);
        assert_eq!(classify("G1", ""), Grassland);
        assert_eq!(classify("H3", ""), Wetland);
        assert_eq!(classify("R1", ""), Residential);
        assert_eq!(classify("C1", ""), Commercial);
    }
}
