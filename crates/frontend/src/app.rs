use crate::shared::tabs::{SpvTabs, TabSpec};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let tabs = vec![
        TabSpec::new("spvHeaders", "Headers", || {
            view! { <p>"Block headers synced by the SPV client."</p> }
        }),
        TabSpec::new("spvTransactions", "Transactions", || {
            view! { <p>"Transactions matched by the wallet filter, with merkle proofs."</p> }
        }),
        TabSpec::new("spvPeers", "Peers", || {
            view! { <p>"Full nodes serving headers and filtered blocks."</p> }
        }),
    ];

    view! {
        <SpvTabs tabs=tabs initial="spvHeaders" />
    }
}

