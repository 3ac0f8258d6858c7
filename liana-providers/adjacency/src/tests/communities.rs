use super::support::{assert_close, graph, path, star};
use crate::{CommunityAlgorithm, CommunityError, detect_communities, normalized_mutual_information};
use rstest::rstest;

/// Two triangles `0-1-2` and `3-4-5` joined by nothing.
fn twin_triangles() -> crate::AdjacencyGraph {
    graph(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])
}

#[rstest]
#[case::blondel(CommunityAlgorithm::Blondel)]
#[case::label_propagation(CommunityAlgorithm::LabelPropagation)]
#[case::components(CommunityAlgorithm::Components)]
fn separate_triangles_form_two_communities(#[case] algorithm: CommunityAlgorithm) {
    assert_eq!(
        detect_communities(&twin_triangles(), algorithm),
        vec![0, 0, 0, 1, 1, 1]
    );
}

#[rstest]
fn label_propagation_settles_a_star_on_one_label() {
    let membership = detect_communities(&star(4), CommunityAlgorithm::LabelPropagation);
    assert_eq!(membership, vec![0; 5]);
}

#[rstest]
fn blondel_splits_bridged_triangles_at_the_bridge() {
    let bridged = graph(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]);
    assert_eq!(
        detect_communities(&bridged, CommunityAlgorithm::Blondel),
        vec![0, 0, 0, 1, 1, 1]
    );
}

#[rstest]
fn blondel_keeps_every_node_apart_without_edges() {
    assert_eq!(
        detect_communities(&graph(3, &[]), CommunityAlgorithm::Blondel),
        vec![0, 1, 2]
    );
}

#[rstest]
#[case::blondel(CommunityAlgorithm::Blondel)]
#[case::label_propagation(CommunityAlgorithm::LabelPropagation)]
#[case::components(CommunityAlgorithm::Components)]
fn isolated_nodes_keep_their_own_community(#[case] algorithm: CommunityAlgorithm) {
    assert_eq!(detect_communities(&graph(3, &[(0, 1)]), algorithm), vec![0, 0, 1]);
    assert!(detect_communities(&graph(0, &[]), algorithm).is_empty());
}

#[rstest]
fn components_follow_connectivity() {
    let membership = detect_communities(&path(4), CommunityAlgorithm::Components);
    assert_eq!(membership, vec![0; 4]);
}

#[rstest]
#[case("Blondel", CommunityAlgorithm::Blondel)]
#[case("LabelPropagation", CommunityAlgorithm::LabelPropagation)]
#[case("Components", CommunityAlgorithm::Components)]
fn algorithms_round_trip_through_their_names(
    #[case] raw: &str,
    #[case] expected: CommunityAlgorithm,
) {
    let parsed: CommunityAlgorithm = raw.parse().expect("known algorithm");
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), raw);
}

#[rstest]
fn unknown_algorithms_are_rejected() {
    let err = "InfoMap".parse::<CommunityAlgorithm>().expect_err("not supported");
    assert_eq!(
        err,
        CommunityError::UnknownAlgorithm {
            name: "InfoMap".into()
        }
    );
    assert!("blondel".parse::<CommunityAlgorithm>().is_err());
}

#[rstest]
#[case::identical(&[0, 0, 1, 1], &[0, 0, 1, 1], 1.0)]
#[case::renamed(&[0, 0, 1, 1], &[7, 7, 3, 3], 1.0)]
#[case::independent(&[0, 0, 1, 1], &[0, 1, 0, 1], 0.0)]
#[case::both_trivial(&[0, 0, 0], &[4, 4, 4], 1.0)]
#[case::one_trivial(&[0, 0, 0, 0], &[0, 0, 1, 1], 0.0)]
#[case::empty(&[], &[], 1.0)]
fn nmi_scores_agreement(#[case] left: &[usize], #[case] right: &[usize], #[case] expected: f64) {
    let nmi = normalized_mutual_information(left, right).expect("lengths match");
    assert_close(nmi, expected, 1e-12);
}

#[rstest]
fn nmi_of_a_refinement_is_between_zero_and_one() {
    // H(left) = ln 2, H(right) = 1.5 ln 2, I = ln 2.
    let nmi = normalized_mutual_information(&[0, 0, 1, 1], &[0, 1, 2, 2]).expect("lengths match");
    assert_close(nmi, 1.0 / 1.5_f64.sqrt(), 1e-12);
}

#[rstest]
fn nmi_rejects_mismatched_lengths() {
    let err = normalized_mutual_information(&[0, 1], &[0]).expect_err("lengths differ");
    assert_eq!(err, CommunityError::LengthMismatch { left: 2, right: 1 });
}

proptest::proptest! {
    #[test]
    fn nmi_is_symmetric_and_bounded(
        pairs in proptest::collection::vec((0_usize..4, 0_usize..4), 0..32),
    ) {
        let (left, right): (Vec<usize>, Vec<usize>) = pairs.into_iter().unzip();
        let forward = normalized_mutual_information(&left, &right).expect("lengths match");
        let backward = normalized_mutual_information(&right, &left).expect("lengths match");
        proptest::prop_assert!((forward - backward).abs() <= 1e-12);
        proptest::prop_assert!((0.0..=1.0).contains(&forward));
        let own = normalized_mutual_information(&left, &left).expect("lengths match");
        proptest::prop_assert!((own - 1.0).abs() <= 1e-12);
    }
}
