//! One user-triggered alignment action
//!
//! Strings the host collaborators and the engine together: read the
//! selection, ask for the anchor, plan, apply, report and refresh. Every
//! abort is reported through the notifier before it is returned, except a
//! dismissed anchor prompt, which returns silently. A prompt that fails to
//! read is an error, not a cancel.

use crate::align::{
    plan_alignment, AlignConfig, AlignError, AlignmentPlan, AlignmentRequest, FootprintRef,
    LabelKind,
};
use crate::host::{
    AnchorCandidate, AnchorPicker, LabelAccessor, Notification, Notifier, RefreshTrigger,
    SelectionProvider,
};

/// Summary of a completed pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentReport {
    pub kind: LabelKind,
    pub anchor_name: String,
    pub moved: usize,
    pub skipped: usize,
}

/// A planned pass whose anchor the user has already chosen
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedAlignment {
    pub anchor_name: String,
    pub plan: AlignmentPlan,
}

/// Anchor candidates for a selection, sorted case-insensitively by display name.
///
/// Footprints without a reference are shown as `<unnamed {i}>`, where `i` is
/// their position in the selection. The candidate footprint carries the same
/// name, so the engine and the caller report it the way the prompt showed it.
pub fn anchor_candidates(selected: &[FootprintRef]) -> Vec<AnchorCandidate> {
    let mut candidates: Vec<AnchorCandidate> = selected
        .iter()
        .enumerate()
        .map(|(i, fp)| {
            let footprint = match fp.name {
                Some(_) => fp.clone(),
                None => fp.clone().with_display_name(format!("<unnamed {}>", i)),
            };
            AnchorCandidate {
                display_name: footprint.display_name.clone(),
                footprint,
            }
        })
        .collect();
    candidates.sort_by_cached_key(|c| c.display_name.to_uppercase());
    candidates
}

/// Read the selection, ask for the anchor and plan the pass without writing
pub fn prepare_alignment<H, P, N>(
    host: &H,
    picker: &mut P,
    notifier: &mut N,
    kind: LabelKind,
    config: &AlignConfig,
) -> Result<PreparedAlignment, AlignError>
where
    H: SelectionProvider + LabelAccessor + ?Sized,
    P: AnchorPicker + ?Sized,
    N: Notifier + ?Sized,
{
    let selected = host.selected_footprints();
    if selected.len() < 2 {
        return Err(report(notifier, AlignError::insufficient(selected.len())));
    }

    let candidates = anchor_candidates(&selected);
    let anchor = match picker.choose_anchor(&candidates) {
        Ok(Some(anchor)) => anchor,
        Ok(None) => return Err(report(notifier, AlignError::AnchorCancelled)),
        Err(e) => return Err(report(notifier, AlignError::prompt_failed(e))),
    };
    let anchor_name = anchor.display_name.clone();

    let request = AlignmentRequest::new(
        kind,
        config,
        anchor,
        candidates.into_iter().map(|c| c.footprint),
    );
    let plan = plan_alignment(&request, host).map_err(|e| report(notifier, e))?;

    Ok(PreparedAlignment { anchor_name, plan })
}

/// Run one alignment pass against the host document.
///
/// On success every planned label has been written, the user has been told
/// how many moved, and the document has been refreshed.
pub fn run_alignment<H, P, N>(
    host: &mut H,
    picker: &mut P,
    notifier: &mut N,
    kind: LabelKind,
    config: &AlignConfig,
) -> Result<AlignmentReport, AlignError>
where
    H: SelectionProvider + LabelAccessor + RefreshTrigger + ?Sized,
    P: AnchorPicker + ?Sized,
    N: Notifier + ?Sized,
{
    let prepared = prepare_alignment(&*host, picker, notifier, kind, config)?;
    let moved = prepared.plan.apply(host);

    notifier.notify(Notification::info(format!(
        "Aligned {} footprint {} to {}.",
        moved,
        kind.plural(),
        prepared.anchor_name
    )));
    host.refresh();

    log::debug!(
        "aligned {} {} to {} ({} skipped)",
        moved,
        kind.plural(),
        prepared.anchor_name,
        prepared.plan.skipped.len()
    );
    Ok(AlignmentReport {
        kind,
        anchor_name: prepared.anchor_name,
        moved,
        skipped: prepared.plan.skipped.len(),
    })
}

fn report<N: Notifier + ?Sized>(notifier: &mut N, err: AlignError) -> AlignError {
    log::debug!("alignment aborted: {}", err);
    if let Some(notification) = err.notification() {
        notifier.notify(notification);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{FootprintId, Point};

    fn fp(id: usize, name: Option<&str>) -> FootprintRef {
        FootprintRef::new(FootprintId(id), name.map(str::to_string), Point::new(0, 0))
    }

    #[test]
    fn test_candidates_sorted_case_insensitive() {
        let selected = vec![fp(0, Some("r2")), fp(1, Some("C1")), fp(2, Some("R1"))];
        let names: Vec<String> = anchor_candidates(&selected)
            .into_iter()
            .map(|c| c.display_name)
            .collect();
        assert_eq!(names, vec!["C1", "R1", "r2"]);
    }

    #[test]
    fn test_unnamed_candidates_use_selection_index() {
        let selected = vec![fp(7, Some("U1")), fp(8, None)];
        let candidates = anchor_candidates(&selected);
        assert_eq!(candidates[0].display_name, "<unnamed 1>");
        assert_eq!(candidates[0].footprint.id, FootprintId(8));
        assert_eq!(candidates[0].footprint.display_name, "<unnamed 1>");
        assert_eq!(candidates[1].footprint.display_name, "U1");
    }
}
