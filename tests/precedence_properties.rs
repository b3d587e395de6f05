//! Algebraic properties of the precedence comparator, checked with proptest.

use std::cmp::Ordering;

use proptest::prelude::*;
use semverkit::{ByVersion, Version};

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..20).prop_map(|n| n.to_string()),
        "[a-c]{1,3}",
        "[A-Za-z0-9-]{1,4}",
    ]
}

fn dotted(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(identifier(), 0..max).prop_map(|ids| ids.join("."))
}

/// Valid versions with small numbers so that ties are common.
fn version() -> impl Strategy<Value = Version> {
    (0u64..3, 0u64..3, 0u64..3, dotted(4), dotted(3)).prop_map(
        |(major, minor, patch, pre_release, build)| Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        },
    )
}

/// Arbitrary field contents, including values a strict parser rejects.
fn unvalidated_version() -> impl Strategy<Value = Version> {
    (0u64..3, 0u64..3, 0u64..3, "[a0-9.+-]{0,6}", ".{0,4}").prop_map(
        |(major, minor, patch, pre_release, build)| Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        },
    )
}

proptest! {
    #[test]
    fn antisymmetry(a in version(), b in version()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare_i32(&b), -b.compare_i32(&a));
    }

    #[test]
    fn reflexivity(a in version(), build in dotted(3)) {
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
        let rebuilt = a.clone().with_build(build);
        prop_assert_eq!(a.compare(&rebuilt), Ordering::Equal);
    }

    #[test]
    fn transitivity(a in version(), b in version(), c in version()) {
        if a.compare(&b) != Ordering::Greater && b.compare(&c) != Ordering::Greater {
            prop_assert_ne!(a.compare(&c), Ordering::Greater);
        }
    }

    #[test]
    fn build_irrelevance(a in version(), x in dotted(3), y in dotted(3)) {
        let left = a.clone().with_build(x);
        let right = a.with_build(y);
        prop_assert_eq!(left.compare(&right), Ordering::Equal);
        prop_assert!(!left.less(&right));
    }

    #[test]
    fn content_equality_is_stricter(a in version(), b in version()) {
        if a.content_equal(&b) {
            prop_assert_eq!(a.compare(&b), Ordering::Equal);
        }
        prop_assert_eq!(a.content_equal(&b), a == b);
    }

    #[test]
    fn total_over_unvalidated_values(a in unvalidated_version(), b in unvalidated_version()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        let rendered = a.full();
        prop_assert!(rendered.starts_with(&a.core()));
    }

    #[test]
    fn sort_output_is_ordered(mut versions in prop::collection::vec(version(), 0..12)) {
        let mut seq = ByVersion(&mut versions);
        seq.sort();
        prop_assert!(seq.is_sorted());
        for pair in versions.windows(2) {
            prop_assert!(!pair[1].less(&pair[0]));
        }
    }
}
