//! Bubble box sizing, mirroring the UI stylesheet: fixed height, width
//! from label length plus room for the feeling icon when present.

pub const BUBBLE_HEIGHT: f32 = 56.0;

const MIN_WIDTH: f32 = 56.0;
const PADDING_X: f32 = 36.0;
const PER_CHAR: f32 = 11.0;
const ICON_EXTRA: f32 = 34.0;

pub fn bubble_size(label: &str, icon: bool) -> (f32, f32) {
    let mut width = PADDING_X + label.chars().count() as f32 * PER_CHAR;
    if icon {
        width += ICON_EXTRA;
    }
    (width.max(MIN_WIDTH), BUBBLE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_grows_with_label_length() {
        let (short, _) = bubble_size("LA", false);
        let (long, _) = bubble_size("watermelon", false);
        assert!(long > short);
    }

    #[test]
    fn icon_widens_the_bubble() {
        let (plain, h1) = bubble_size("Movie", false);
        let (iconed, h2) = bubble_size("Movie", true);
        assert_eq!(iconed, plain + ICON_EXTRA);
        assert_eq!(h1, h2);
    }

    #[test]
    fn empty_label_clamps_to_minimum() {
        let (w, h) = bubble_size("", false);
        assert_eq!(w, MIN_WIDTH);
        assert_eq!(h, BUBBLE_HEIGHT);
    }
}
