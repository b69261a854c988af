use shared::CategoryOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub options: Vec<CategoryOption>,
    pub selected: String,
    pub on_change: Callback<String>,
}

#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <select id="category-filter" {onchange}>
            {for props.options.iter().map(|option| html! {
                <option value={option.value.clone()} selected={option.value == props.selected}>
                    {&option.label}
                </option>
            })}
        </select>
    }
}
