use std::collections::BTreeSet;

use radio_select_model::CanonicalOption;

/// Removes options whose value or label repeats an earlier option's.
///
/// When `enabled` is false the list is returned unchanged. The first
/// occurrence always wins and survivors keep their order.
pub fn dedupe_options(options: Vec<CanonicalOption>, enabled: bool) -> Vec<CanonicalOption> {
    if !enabled {
        return options;
    }
    let keep = unseen_mask(&options);
    options
        .into_iter()
        .zip(keep)
        .filter_map(|(option, keep)| keep.then_some(option))
        .collect()
}

fn unseen_mask(options: &[CanonicalOption]) -> Vec<bool> {
    let mut seen_values = BTreeSet::new();
    let mut seen_labels = BTreeSet::new();
    let mut keep = Vec::with_capacity(options.len());
    for (idx, option) in options.iter().enumerate() {
        let unseen =
            !seen_values.contains(option.value()) && !seen_labels.contains(option.label());
        if unseen {
            seen_values.insert(option.value());
            seen_labels.insert(option.label());
        } else {
            tracing::trace!(
                index = idx,
                value = option.value(),
                label = option.label(),
                "dropping duplicate option"
            );
        }
        keep.push(unseen);
    }
    keep
}
