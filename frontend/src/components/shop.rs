use shared::WidgetConfig;
use yew::prelude::*;

use crate::components::cart_badge::CartBadge;
use crate::components::category_filter::CategoryFilter;
use crate::components::product_card::ProductCard;
use crate::hooks::use_shop::use_shop;

#[derive(Properties, PartialEq)]
pub struct ShopProps {
    pub config: WidgetConfig,
}

/// Category filter, product grid and cart count, mounted into `#shop`
#[function_component(Shop)]
pub fn shop(props: &ShopProps) -> Html {
    let shop = use_shop(&props.config);
    let labels = &props.config.labels;

    let options = shop.catalog.category_options(labels);
    let cards = shop.catalog.product_cards(&shop.category, labels);

    html! {
        <section class="shop">
            <div class="shop-toolbar">
                <CategoryFilter
                    {options}
                    selected={shop.category.clone()}
                    on_change={shop.on_filter.clone()}
                />
                <CartBadge count={shop.cart_count} />
            </div>
            <div id="product-list" class="product-list">
                {for cards.into_iter().map(|card| {
                    let key = card.id.clone();
                    html! {
                        <ProductCard
                            {key}
                            {card}
                            on_add_to_cart={shop.on_add_to_cart.clone()}
                        />
                    }
                })}
            </div>
        </section>
    }
}
