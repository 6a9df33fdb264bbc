pub mod delay;
pub mod time;

pub use delay::TimerDelay;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Current value of an `<input>` behind `node`, or empty when unmounted.
pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Value of the `<input>` or `<textarea>` that fired `e`.
pub fn event_value(e: &InputEvent) -> String {
    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        return area.value();
    }
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Value of the `<select>` that fired `e`.
pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Uniform sample in `[0, 1)` from the browser.
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Position of a pointer along one axis of an element, rescaled to a
/// container of `extent` logical pixels. `None` when the element has no
/// rendered size.
pub fn scaled_offset(
    client: f64,
    origin: f64,
    rendered: f64,
    extent: f64,
) -> Option<f64> {
    (rendered > 0.0).then(|| (client - origin) / rendered * extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_scale_to_the_logical_container() {
        assert_eq!(scaled_offset(150.0, 100.0, 100.0, 480.0), Some(240.0));
        assert_eq!(scaled_offset(100.0, 100.0, 960.0, 480.0), Some(0.0));
    }

    #[test]
    fn collapsed_elements_have_no_offset() {
        assert_eq!(scaled_offset(10.0, 0.0, 0.0, 480.0), None);
    }
}
