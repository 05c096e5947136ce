//! Cross-table consistency checks over the public API.

use saju_base::{
    ALL_BRANCHES, ALL_STEMS, Branch, CYCLE, Phase, SexagenaryTerm, Stem, TenRole, hour_branch,
    hour_term, month_term, role_group, stem_combine, ten_role,
};

#[test]
fn cycle_closed_under_addition() {
    for a in CYCLE {
        for n in [0i64, 1, 7, 59, 60, 61, -1, -121] {
            let b = a.offset(n);
            assert_eq!(b.index() as i64, (a.index() as i64 + n).rem_euclid(60));
        }
    }
}

#[test]
fn month_and_hour_tables_cover_full_cycles() {
    for s in ALL_STEMS {
        let months: Vec<_> = (0..12).map(|m| month_term(s, m)).collect();
        let branches: Vec<_> = months.iter().map(|t| t.branch()).collect();
        let expected: Vec<_> = (0..12).map(|i| Branch::Yin.offset(i)).collect();
        assert_eq!(branches, expected);
        // consecutive months are consecutive terms
        for w in months.windows(2) {
            assert_eq!(w[0].offset(1), w[1]);
        }
        for b in ALL_BRANCHES {
            assert_eq!(hour_term(s, b).branch(), b);
        }
    }
}

#[test]
fn five_year_classes_share_month_tables() {
    for s in ALL_STEMS {
        assert_eq!(month_term(s, 0), month_term(s.offset(5), 0));
        assert_eq!(hour_term(s, Branch::Zi), hour_term(s.offset(5), Branch::Zi));
    }
}

#[test]
fn ninth_hour_falls_in_si() {
    assert_eq!(hour_branch(9), Branch::Si);
    let term = hour_term(Stem::Xin, hour_branch(9));
    assert_eq!(term, "guisi".parse::<SexagenaryTerm>().unwrap());
}

#[test]
fn combined_stems_stand_in_wealth_officer_relation() {
    for a in ALL_STEMS {
        for b in ALL_STEMS {
            if stem_combine(a, b).is_some() {
                let r = ten_role(a, b);
                assert!(matches!(r, TenRole::DirectWealth | TenRole::DirectOfficer), "{a} {b}");
            }
        }
    }
}

#[test]
fn role_group_depends_only_on_phase() {
    for a in ALL_STEMS {
        for b in ALL_STEMS {
            assert_eq!(ten_role(a, b).group(), role_group(a.phase(), b.phase()));
        }
    }
    assert_eq!(role_group(Phase::Fire, Phase::Water).name(), "officer");
}
