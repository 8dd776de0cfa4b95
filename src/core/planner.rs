//! Segment planning
//!
//! Pure arithmetic: no I/O, fully deterministic. All values are whole
//! seconds, so offsets never drift however many segments the plan holds.

use crate::core::config::SplitConfig;
use crate::core::models::media::AudioAsset;
use crate::core::models::plan::{SegmentPlan, SegmentSpec};
use crate::core::models::results::CoreResult;
use std::path::Path;

/// Compute the ordered segment plan for one source and configuration.
///
/// Returns an empty plan when the source fits within a single segment
/// (the caller reads that as "no split needed"; it is not an error).
///
/// Every segment except the last has exactly the configured length and
/// starts `stride = segment_length - overlap` after its predecessor. The
/// last segment absorbs whatever remains so the plan covers the source with
/// no trailing gap; its length may be shorter or longer than the target.
///
/// The segment count is always the closed form
/// `(total - overlap) / stride + 1`. With zero overlap and a total that
/// divides evenly by the segment length this emits a final segment of zero
/// duration; the degenerate tail is kept so the count stays closed-form for
/// every valid input.
pub fn plan(asset: &AudioAsset, config: &SplitConfig) -> CoreResult<SegmentPlan> {
    config.validate()?;

    let total = asset.total_duration_secs;
    let length = config.segment_length_secs;
    let overlap = config.overlap_secs;

    let mut segments = Vec::new();

    if total > length {
        let stride = config.stride_secs();
        let count = ((total - overlap) / stride + 1) as usize;

        let out_dir = match &config.output_dir {
            Some(dir) => dir.clone(),
            None => asset
                .path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf(),
        };
        let stem = asset.stem();

        for i in 0..count {
            let start = i as u64 * stride;
            let duration = if i == count - 1 {
                // Last segment takes everything remaining
                total - start
            } else {
                length
            };

            let index = i + 1;
            let filename = SegmentSpec::output_filename(stem, index, &config.output_format);

            segments.push(SegmentSpec {
                index,
                start_secs: start,
                duration_secs: duration,
                output_path: out_dir.join(filename),
            });
        }
    }

    Ok(SegmentPlan {
        asset: asset.clone(),
        config: config.clone(),
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn asset(total: u64) -> AudioAsset {
        AudioAsset::new(PathBuf::from("/media/interview.mp3"), total)
    }

    fn config(length: u64, overlap: u64) -> SplitConfig {
        SplitConfig {
            segment_length_secs: length,
            overlap_secs: overlap,
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_scenario() {
        // 90 minutes at 30-minute segments with 30 s overlap
        let plan = plan(&asset(5400), &config(1800, 30)).unwrap();
        assert_eq!(plan.len(), 4);

        let starts: Vec<u64> = plan.segments.iter().map(|s| s.start_secs).collect();
        let durations: Vec<u64> = plan.segments.iter().map(|s| s.duration_secs).collect();
        assert_eq!(starts, vec![0, 1770, 3540, 5310]);
        assert_eq!(durations, vec![1800, 1800, 1800, 90]);

        // Last segment ends exactly at the total duration
        assert_eq!(plan.segments.last().unwrap().end_secs(), 5400);
    }

    #[test]
    fn test_short_file_yields_empty_plan() {
        let plan = plan(&asset(1200), &config(1800, 30)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_exact_length_is_not_split() {
        // Strict comparison: a file exactly one segment long is left alone
        let plan = plan(&asset(1800), &config(1800, 30)).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_one_second_over_splits() {
        let plan = plan(&asset(1801), &config(1800, 30)).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.segments[1].start_secs, 1770);
        assert_eq!(plan.segments[1].duration_secs, 31);
    }

    #[test]
    fn test_coverage_and_overlap_properties() {
        // Sweep a range of shapes and check the plan invariants hold
        for total in [3601, 5400, 7200, 9999, 86400] {
            for (length, overlap) in [(1800, 30), (600, 0), (900, 120), (60, 59)] {
                let plan = plan(&asset(total), &config(length, overlap)).unwrap();
                let segs = &plan.segments;
                assert!(!segs.is_empty(), "total={total} length={length}");

                // Closed-form count
                let expected = ((total - overlap) / (length - overlap) + 1) as usize;
                assert_eq!(segs.len(), expected, "total={total} length={length}");

                // Coverage starts at zero and ends at the total
                assert_eq!(segs[0].start_secs, 0);
                assert_eq!(segs.last().unwrap().end_secs(), total);

                for pair in segs.windows(2) {
                    // Ordinals contiguous, starts non-decreasing, no gaps
                    assert_eq!(pair[1].index, pair[0].index + 1);
                    assert!(pair[1].start_secs >= pair[0].start_secs);
                    assert!(pair[0].end_secs() >= pair[1].start_secs);
                }

                // Every non-final segment has the target length, and every
                // non-final adjacent pair overlaps by exactly `overlap`
                for (i, pair) in segs.windows(2).enumerate() {
                    assert_eq!(pair[0].duration_secs, length);
                    if i + 2 < segs.len() {
                        assert_eq!(pair[0].end_secs() - pair[1].start_secs, overlap);
                    }
                }
            }
        }
    }

    #[test]
    fn test_planning_is_deterministic() {
        let a = asset(7300);
        let c = config(1800, 30);
        let first = plan(&a, &c).unwrap();
        let second = plan(&a, &c).unwrap();
        assert_eq!(first.segments, second.segments);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(plan(&asset(5400), &config(1800, 1800)).is_err());
        assert!(plan(&asset(5400), &config(0, 0)).is_err());
    }

    #[test]
    fn test_output_paths() {
        let plan = plan(&asset(5400), &config(1800, 30)).unwrap();
        assert_eq!(
            plan.segments[0].output_path,
            PathBuf::from("/media/interview_part01.mp3")
        );
        assert_eq!(
            plan.segments[3].output_path,
            PathBuf::from("/media/interview_part04.mp3")
        );
    }

    #[test]
    fn test_output_dir_override() {
        let mut cfg = config(1800, 30);
        cfg.output_dir = Some(PathBuf::from("/tmp/segments"));
        cfg.output_format = "wav".to_string();

        let plan = plan(&asset(5400), &cfg).unwrap();
        assert_eq!(
            plan.segments[0].output_path,
            PathBuf::from("/tmp/segments/interview_part01.wav")
        );
    }

    #[test]
    fn test_zero_overlap() {
        let plan = plan(&asset(3600), &config(600, 0)).unwrap();
        // Closed form: (3600 - 0) / 600 + 1. With zero overlap and an exact
        // division the final remainder segment is empty.
        assert_eq!(plan.len(), 7);
        assert_eq!(plan.segments[5].end_secs(), 3600);
        assert_eq!(plan.segments[6].start_secs, 3600);
        assert_eq!(plan.segments[6].duration_secs, 0);
    }
}
