/// Where a block sits in content coordinates (origin at the top of the
/// scrollable content).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGeometry {
    pub top: f32,
    pub height: f32,
}

/// Trigger line as a fraction of viewport height, plus the share of the block
/// height over which progress runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    pub fraction: f32,
    pub span: f32,
}

impl TriggerBand {
    pub fn new(fraction: f32, span: f32) -> Self {
        Self { fraction, span }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub height: f32,
    pub scroll_offset: f32,
    pub content_height: f32,
}

/// One block as seen by a frame computation. `geometry` is `None` while the
/// block is not laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedBlock {
    pub geometry: Option<BlockGeometry>,
    pub band: TriggerBand,
}

/// Progress of a block whose top edge is `top` pixels below the viewport top.
///
/// Zero until the top edge reaches the trigger line, one after the block has
/// moved `height * span` past it.
pub fn reveal_progress(top: f32, height: f32, viewport_height: f32, band: TriggerBand) -> f32 {
    if !(top.is_finite() && height.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }
    let trigger_point = viewport_height * band.fraction;
    let travelled = trigger_point - top;
    if travelled <= 0.0 {
        return 0.0;
    }
    let span = height * band.span;
    if span <= 0.0 {
        return 1.0;
    }
    (travelled / span).clamp(0.0, 1.0)
}

/// Word `index` of `total` shows once progress is strictly past `index / total`.
pub fn word_revealed(progress: f32, index: usize, total: usize) -> bool {
    if total == 0 {
        return false;
    }
    progress > index as f32 / total as f32
}

pub fn revealed_word_count(progress: f32, total: usize) -> usize {
    (0..total)
        .take_while(|&index| word_revealed(progress, index, total))
        .count()
}

/// True when the viewport bottom is within `tolerance` pixels of the content end.
pub fn at_document_end(viewport: &ViewportMetrics, tolerance: f32) -> bool {
    viewport.height > 0.0
        && viewport.height + viewport.scroll_offset >= viewport.content_height - tolerance
}

/// Progress for every block in page order. The last block is forced to 1 at
/// the end of the document so short trailing content still completes.
pub fn frame_progress(
    blocks: &[TrackedBlock],
    viewport: Option<&ViewportMetrics>,
    bottom_tolerance: f32,
) -> Vec<f32> {
    let Some(viewport) = viewport.filter(|v| v.height > 0.0) else {
        return vec![0.0; blocks.len()];
    };

    let mut progress: Vec<f32> = blocks
        .iter()
        .map(|block| match block.geometry {
            Some(geometry) => reveal_progress(
                geometry.top - viewport.scroll_offset,
                geometry.height,
                viewport.height,
                block.band,
            ),
            None => 0.0,
        })
        .collect();

    if at_document_end(viewport, bottom_tolerance) {
        if let (Some(last), Some(block)) = (progress.last_mut(), blocks.last()) {
            if block.geometry.is_some() {
                *last = 1.0;
            }
        }
    }
    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: TriggerBand = TriggerBand {
        fraction: 0.7,
        span: 1.0,
    };

    #[test]
    fn scenario_from_trigger_point() {
        assert_eq!(reveal_progress(700.0, 200.0, 1000.0, MAIN), 0.0);
        assert_eq!(reveal_progress(500.0, 200.0, 1000.0, MAIN), 1.0);
        assert_eq!(reveal_progress(600.0, 200.0, 1000.0, MAIN), 0.5);
    }

    #[test]
    fn zero_at_or_below_trigger_and_one_past_block() {
        for top in [700.0, 701.5, 950.0, 5000.0] {
            assert_eq!(reveal_progress(top, 120.0, 1000.0, MAIN), 0.0);
        }
        for top in [580.0, 579.0, 0.0, -3000.0] {
            assert_eq!(reveal_progress(top, 120.0, 1000.0, MAIN), 1.0);
        }
    }

    #[test]
    fn monotonic_in_scroll_offset() {
        let geometry = BlockGeometry {
            top: 1800.0,
            height: 340.0,
        };
        let mut previous = 0.0f32;
        for step in 0..400 {
            let scroll = step as f32 * 7.5;
            let p = reveal_progress(geometry.top - scroll, geometry.height, 900.0, MAIN);
            assert!(p >= previous, "progress regressed at scroll {scroll}");
            previous = p;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn span_finishes_reveal_early() {
        let panel = TriggerBand::new(0.8, 0.8);
        // trigger = 800; travelled 160 of an effective 160px span.
        assert_eq!(reveal_progress(640.0, 200.0, 1000.0, panel), 1.0);
        assert!((reveal_progress(720.0, 200.0, 1000.0, panel) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn flat_block_flips_at_trigger() {
        assert_eq!(reveal_progress(700.0, 0.0, 1000.0, MAIN), 0.0);
        assert_eq!(reveal_progress(699.0, 0.0, 1000.0, MAIN), 1.0);
    }

    #[test]
    fn word_threshold_is_strict() {
        let total = 8;
        for index in 0..total {
            let exact = index as f32 / total as f32;
            assert!(!word_revealed(exact, index, total));
            assert!(word_revealed(exact + 1e-4, index, total));
        }
        assert!(!word_revealed(0.0, 0, total));
        assert!(!word_revealed(1.0, 0, 0));
    }

    #[test]
    fn revealed_count_tracks_progress() {
        assert_eq!(revealed_word_count(0.0, 10), 0);
        assert_eq!(revealed_word_count(0.05, 10), 1);
        assert_eq!(revealed_word_count(0.5, 4), 2);
        assert_eq!(revealed_word_count(0.51, 4), 3);
        assert_eq!(revealed_word_count(1.0, 10), 10);
    }

    #[test]
    fn document_end_forces_last_block() {
        let blocks = [
            TrackedBlock {
                geometry: Some(BlockGeometry {
                    top: 100.0,
                    height: 200.0,
                }),
                band: MAIN,
            },
            TrackedBlock {
                geometry: Some(BlockGeometry {
                    top: 1850.0,
                    height: 200.0,
                }),
                band: MAIN,
            },
        ];
        let viewport = ViewportMetrics {
            height: 1000.0,
            scroll_offset: 1095.0,
            content_height: 2100.0,
        };
        // Raw value for the last block: (700 - 755) / 200 < 0.
        assert_eq!(
            reveal_progress(1850.0 - 1095.0, 200.0, 1000.0, MAIN),
            0.0
        );
        assert!(at_document_end(&viewport, 10.0));
        let progress = frame_progress(&blocks, Some(&viewport), 10.0);
        assert_eq!(progress, vec![1.0, 1.0]);

        let short_of_end = ViewportMetrics {
            scroll_offset: 1080.0,
            ..viewport
        };
        assert!(!at_document_end(&short_of_end, 10.0));
        assert_eq!(frame_progress(&blocks, Some(&short_of_end), 10.0)[1], 0.0);
    }

    #[test]
    fn missing_geometry_is_zero() {
        let blocks = [TrackedBlock {
            geometry: None,
            band: MAIN,
        }];
        let viewport = ViewportMetrics {
            height: 800.0,
            scroll_offset: 5000.0,
            content_height: 5800.0,
        };
        assert_eq!(frame_progress(&blocks, Some(&viewport), 10.0), vec![0.0]);
        assert_eq!(frame_progress(&blocks, None, 10.0), vec![0.0]);
    }
}
