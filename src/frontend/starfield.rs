use yew::prelude::*;

use super::dom;
use super::Wiring;
use crate::error::SiteResult;
use crate::starfield::{generate, star_count};

#[derive(Properties, PartialEq)]
pub struct StarfieldProps {
    pub count: usize,
    pub reduced_motion: bool,
}

#[function_component(Starfield)]
pub fn starfield(props: &StarfieldProps) -> Html {
    let stars = use_memo(props.count, |count| generate(*count, &mut fastrand::Rng::new()));
    let reduced_motion = props.reduced_motion;

    html! {
        <>
            { for stars.iter().map(|star| html! {
                <div class="star" style={star.style(reduced_motion)} />
            }) }
        </>
    }
}

pub fn mount(wiring: &mut Wiring) -> SiteResult<()> {
    let Some(container) = wiring.document.get_element_by_id("stars") else {
        return Ok(());
    };

    // Yew owns everything under its root, so the stars get their own layer
    // and markup already inside `#stars` stays put.
    let layer = wiring.document.create_element("div")?;
    layer.set_class_name("star-layer");
    layer.set_attribute("style", "display: contents;")?;
    container.append_child(&layer)?;

    let props = StarfieldProps {
        count: star_count(dom::viewport_width()),
        reduced_motion: dom::prefers_reduced_motion(),
    };
    let app = yew::Renderer::<Starfield>::with_root_and_props(layer, props).render();
    wiring.starfield = Some(app);
    Ok(())
}
