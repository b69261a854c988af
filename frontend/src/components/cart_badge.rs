use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CartBadgeProps {
    pub count: u32,
}

#[function_component(CartBadge)]
pub fn cart_badge(props: &CartBadgeProps) -> Html {
    html! {
        <span class="cart-indicator">
            {"🛒 "}
            <span id="cart-count">{props.count}</span>
        </span>
    }
}
