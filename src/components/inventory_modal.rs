//! "View Live Inventory" button and the searchable inventory modal.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::InventoryItem;
use crate::state::inventory::InventoryState;

fn fetch_inventory(inventory: RwSignal<InventoryState>, client: &ApiClient) {
    inventory.update(|inv| inv.loading = true);
    let client = client.clone();
    leptos::task::spawn_local(async move {
        match client.get_json::<Vec<InventoryItem>>("/inventory").await {
            Ok(items) => inventory.update(|inv| {
                inv.items = items;
                inv.loading = false;
            }),
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to fetch inventory: {_err}");
                inventory.update(|inv| inv.loading = false);
            }
        }
    });
}

/// Button plus modal; the inventory is fetched each time the modal opens.
#[component]
pub fn InventoryModal() -> impl IntoView {
    let inventory = expect_context::<RwSignal<InventoryState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let on_open = move |_| {
        inventory.update(|inv| {
            inv.open = true;
            inv.search = String::new();
        });
        fetch_inventory(inventory, &client.get_value());
    };
    let on_close = move |_| inventory.update(|inv| inv.open = false);

    view! {
        <button class="btn" on:click=on_open>
            "View Live Inventory"
        </button>

        {move || {
            let state = inventory.get();
            if !state.open {
                return None;
            }
            let rows = state
                .filtered()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            Some(view! {
                <div class="inventory-modal__overlay">
                    <div class="inventory-modal">
                        <div class="inventory-modal__header">
                            <h2>"Current Inventory"</h2>
                            <button class="btn" on:click=on_close>
                                "Close"
                            </button>
                        </div>
                        <div class="inventory-modal__search">
                            <input
                                type="text"
                                placeholder="Search by make, model, year, stock #, VIN, or color..."
                                prop:value=move || inventory.get().search
                                on:input=move |ev| {
                                    let term = event_target_value(&ev);
                                    inventory.update(|inv| inv.search = term);
                                }
                            />
                        </div>
                        <div class="inventory-modal__content">
                            {if state.loading {
                                view! { <div class="inventory-modal__loading">"Loading inventory..."</div> }
                                    .into_any()
                            } else if rows.is_empty() {
                                view! { <div class="inventory-modal__empty">"No matching vehicles found"</div> }
                                    .into_any()
                            } else {
                                view! {
                                    <table class="inventory-modal__table">
                                        <thead>
                                            <tr>
                                                <th>"Year"</th>
                                                <th>"Make"</th>
                                                <th>"Model"</th>
                                                <th>"Stock #"</th>
                                                <th>"Price"</th>
                                                <th>"Mileage"</th>
                                                <th>"Color"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|car| {
                                                    let mileage = car
                                                        .mileage
                                                        .map_or_else(|| "N/A".to_owned(), |m| m.to_string());
                                                    let color = car.color.unwrap_or_else(|| "N/A".to_owned());
                                                    view! {
                                                        <tr>
                                                            <td>{car.year}</td>
                                                            <td>{car.make}</td>
                                                            <td>{car.model}</td>
                                                            <td>{car.stock_number}</td>
                                                            <td>{format!("${:.0}", car.price)}</td>
                                                            <td>{mileage}</td>
                                                            <td>{color}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }}
                        </div>
                    </div>
                </div>
            })
        }}
    }
}
