use shared::ProductCardView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub card: ProductCardView,
    pub on_add_to_cart: Callback<String>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let card = &props.card;
    let onclick = {
        let on_add_to_cart = props.on_add_to_cart.clone();
        let product_id = card.id.clone();
        Callback::from(move |_: MouseEvent| on_add_to_cart.emit(product_id.clone()))
    };

    html! {
        <div class="product-card">
            <img src={card.image.clone()} alt={card.image_alt.clone()} />
            <h3>{&card.name}</h3>
            <p>{&card.description}</p>
            <p class="price">{&card.price_label}</p>
            <button data-id={card.id.clone()} {onclick}>{&card.button_label}</button>
        </div>
    }
}
