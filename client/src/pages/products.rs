//! Product catalog; admins can add and delete products.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Product, ProductInput};
use crate::util::auth::use_auth;
use crate::util::format::format_price;

pub(crate) fn parse_product_form(name: &str, description: &str, price: &str) -> Result<ProductInput, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Product name is required");
    }
    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or("Enter a valid price")?;
    let description = Some(description.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_owned);
    Ok(ProductInput { name: name.to_owned(), description, price })
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();
    let is_admin = move || auth.with(crate::state::auth::AuthState::is_admin);

    let products = LocalResource::new(move || {
        let client = auth.with(ApiClient::for_session);
        async move { client.products().await }
    });

    let show_form = RwSignal::new(false);

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this product?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let client = auth.with_untracked(ApiClient::for_session);
            leptos::task::spawn_local(async move {
                match client.delete_product(&id).await {
                    Ok(_) => products.refetch(),
                    Err(e) => {
                        if let Some(w) = web_sys::window() {
                            let _ = w.alert_with_message(&e.to_string());
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="products-page">
            <div class="page-header">
                <h1>"Products"</h1>
                <Show when=is_admin>
                    <button class="btn-primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                        {move || if show_form.get() { "Cancel" } else { "New Product" }}
                    </button>
                </Show>
            </div>

            <Show when=move || show_form.get() && is_admin()>
                <ProductForm
                    on_created=Callback::new(move |()| {
                        show_form.set(false);
                        products.refetch();
                    })
                />
            </Show>

            <Suspense fallback=move || view! { <div class="loading">"Loading products..."</div> }>
                {move || {
                    products
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <div class="error">"Error: " {e.to_string()}</div> }.into_any(),
                            Ok(list) if list.is_empty() => view! {
                                <div class="empty-state">
                                    <p>"No products available"</p>
                                </div>
                            }
                            .into_any(),
                            Ok(list) => view! {
                                <div class="products-grid">
                                    {list
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product on_delete show_delete=is_admin()/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProductCard(product: Product, on_delete: Callback<String>, show_delete: bool) -> impl IntoView {
    let id = product.id.clone();
    view! {
        <div class="product-card">
            <h3>{product.name}</h3>
            <p class="product-description">{product.description.unwrap_or_else(|| "No description".to_owned())}</p>
            <p class="product-price">{format_price(product.price)}</p>
            <Show when=move || show_delete>
                <button
                    class="btn-delete"
                    on:click={
                        let id = id.clone();
                        move |_| on_delete.run(id.clone())
                    }
                >
                    "Delete"
                </button>
            </Show>
        </div>
    }
}

/// Admin form for creating a product.
#[component]
fn ProductForm(on_created: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match parse_product_form(&name.get(), &description.get(), &price.get()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = auth.with_untracked(ApiClient::for_session);
            leptos::task::spawn_local(async move {
                match client.create_product(&input).await {
                    Ok(product) => {
                        leptos::logging::log!("created product {}", product.id);
                        name.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
                        on_created.run(());
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, auth, on_created);
        }
    };

    view! {
        <div class="product-form-card">
            <h3>"Create Product"</h3>
            <Show when=move || !error.get().is_empty()>
                <div class="error-message">{move || error.get()}</div>
            </Show>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label>"Name"</label>
                    <input
                        type="text"
                        required
                        placeholder="Product name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Description"</label>
                    <textarea
                        placeholder="Product description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label>"Price"</label>
                    <input
                        type="number"
                        step="0.01"
                        required
                        placeholder="0.00"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Product" }}
                </button>
            </form>
        </div>
    }
}
