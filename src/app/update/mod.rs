mod appearance;
mod core;
mod presentation;
mod scroll;
#[cfg(test)]
mod test_support;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    ScrollTo(f32),
    PrintResume,
    QuitSafely,
}
