/// Keep every `stride`-th item starting with the first, then truncate to `max_points`.
///
/// A `stride` of zero is treated as one. Inputs shorter than the stride
/// yield just the first item; an empty input yields an empty output.
#[must_use]
pub fn downsample<T>(items: Vec<T>, stride: usize, max_points: usize) -> Vec<T> {
    items
        .into_iter()
        .step_by(stride.max(1))
        .take(max_points)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::downsample;

    #[test]
    fn takes_every_third_then_truncates() {
        let v: Vec<u32> = (0..72).collect();
        let out = downsample(v, 3, 24);
        assert_eq!(out.len(), 24);
        assert_eq!(out[0], 0);
        assert_eq!(out[1], 3);
        assert_eq!(out[23], 69);
    }

    #[test]
    fn short_input_is_not_an_error() {
        assert_eq!(downsample(vec![1, 2], 4, 42), vec![1]);
        assert!(downsample(Vec::<u8>::new(), 4, 42).is_empty());
    }
}
