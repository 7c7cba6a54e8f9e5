//! Insertion points of a column and the rule that picks one under the pointer.

/// `data-before` value of the trailing indicator of a column.
pub const END_SENTINEL: &str = "-1";

/// Where a dropped card lands inside a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Immediately ahead of the task with this id.
    Before(String),
    /// After every task in the sequence.
    End,
}

impl DropTarget {
    pub fn from_attr(value: &str) -> Self {
        if value.is_empty() || value == END_SENTINEL {
            DropTarget::End
        } else {
            DropTarget::Before(value.to_string())
        }
    }

    pub fn to_attr(&self) -> String {
        match self {
            DropTarget::Before(id) => id.clone(),
            DropTarget::End => END_SENTINEL.to_string(),
        }
    }

    pub fn is_before(&self, task_id: &str) -> bool {
        matches!(self, DropTarget::Before(id) if id == task_id)
    }
}

/// A rendered indicator: its top edge in viewport coordinates plus the
/// address it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorBox {
    pub top: f64,
    pub target: DropTarget,
}

/// Pick the indicator nearest above the pointer.
///
/// Each indicator is compared at `top + band`. Among those whose comparison
/// point is still below the pointer (negative offset) the largest offset
/// wins; on exact ties the first one in `indicators` is kept. When none
/// qualifies, the last indicator (the column's trailing one) is returned.
/// `None` only for an empty slice.
pub fn nearest_indicator(
    pointer_y: f64,
    indicators: &[IndicatorBox],
    band: f64,
) -> Option<&IndicatorBox> {
    let fallback = indicators.last()?;

    let (_, nearest) = indicators.iter().fold(
        (f64::NEG_INFINITY, fallback),
        |(closest, current), indicator| {
            let offset = pointer_y - (indicator.top + band);
            if offset < 0.0 && offset > closest {
                (offset, indicator)
            } else {
                (closest, current)
            }
        },
    );
    Some(nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(tops: &[(f64, &str)]) -> Vec<IndicatorBox> {
        tops.iter()
            .map(|(top, attr)| IndicatorBox {
                top: *top,
                target: DropTarget::from_attr(attr),
            })
            .collect()
    }

    #[test]
    fn attr_encoding() {
        assert_eq!(DropTarget::from_attr("-1"), DropTarget::End);
        assert_eq!(DropTarget::from_attr(""), DropTarget::End);
        assert_eq!(DropTarget::from_attr("abc"), DropTarget::Before("abc".to_string()));
        assert_eq!(DropTarget::End.to_attr(), "-1");
        assert_eq!(DropTarget::Before("abc".to_string()).to_attr(), "abc");
        assert!(DropTarget::Before("abc".to_string()).is_before("abc"));
        assert!(!DropTarget::End.is_before("-1"));
    }

    #[test]
    fn picks_nearest_indicator_above_pointer() {
        let indicators = column(&[(0.0, "a"), (60.0, "b"), (120.0, "-1")]);
        // comparison points: 50, 110, 170
        let hit = nearest_indicator(80.0, &indicators, 50.0).unwrap();
        assert_eq!(hit.target, DropTarget::Before("b".to_string()));

        let hit = nearest_indicator(10.0, &indicators, 50.0).unwrap();
        assert_eq!(hit.target, DropTarget::Before("a".to_string()));
    }

    #[test]
    fn falls_back_to_trailing_indicator() {
        let indicators = column(&[(0.0, "a"), (60.0, "b"), (120.0, "-1")]);
        let hit = nearest_indicator(500.0, &indicators, 50.0).unwrap();
        assert_eq!(hit.target, DropTarget::End);
    }

    #[test]
    fn offset_exactly_zero_does_not_qualify() {
        let indicators = column(&[(0.0, "a"), (100.0, "-1")]);
        let hit = nearest_indicator(50.0, &indicators, 50.0).unwrap();
        assert_eq!(hit.target, DropTarget::End);
    }

    #[test]
    fn ties_keep_first_indicator() {
        let indicators = column(&[(40.0, "a"), (40.0, "b"), (200.0, "-1")]);
        let hit = nearest_indicator(60.0, &indicators, 50.0).unwrap();
        assert_eq!(hit.target, DropTarget::Before("a".to_string()));
    }

    #[test]
    fn empty_column_has_no_indicator() {
        assert!(nearest_indicator(10.0, &[], 50.0).is_none());
    }

    #[test]
    fn lone_trailing_indicator_always_wins() {
        let indicators = column(&[(300.0, "-1")]);
        for y in [0.0, 349.0, 350.0, 1_000.0] {
            let hit = nearest_indicator(y, &indicators, 50.0).unwrap();
            assert_eq!(hit.target, DropTarget::End);
        }
    }
}
