use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub dark: bool,
}

/// Centered eyebrow + heading used above every landing section. `dark`
/// flips the palette for sections on a light background.
#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let eyebrow_color = if props.dark { "#2563eb" } else { "#60a5fa" };
    let heading_color = if props.dark { "#000" } else { "#fff" };

    html! {
        <div class="section-title reveal">
            <span class="section-eyebrow" style={format!("color: {};", eyebrow_color)}>
                { props.title.clone() }
            </span>
            <h2 class="section-heading" style={format!("color: {};", heading_color)}>
                { props.subtitle.clone() }
            </h2>
            <div class="section-underline"></div>
        </div>
    }
}
