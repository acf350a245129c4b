pub mod sidebar;

use crate::domain::a003_cloud_offer::ui::list::CloudOfferList;
use crate::domain::a004_soc_offer::ui::list::SocOfferList;
use crate::domain::a005_pricing::ui::PricingTabs;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Разделы приложения; роутера нет, активный раздел живёт в сигнале
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CloudOffers,
    SocOffers,
    Pricing,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::CloudOffers => "Облачные предложения",
            Section::SocOffers => "SOC-подписки",
            Section::Pricing => "Ценообразование",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Section::CloudOffers => "cloud",
            Section::SocOffers => "shield",
            Section::Pricing => "pricing",
        }
    }

    pub fn all() -> Vec<Section> {
        vec![Section::CloudOffers, Section::SocOffers, Section::Pricing]
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let active = RwSignal::new(Section::CloudOffers);

    view! {
        <div class="shell">
            <Sidebar active=active />
            <main class="shell__content">
                {move || match active.get() {
                    Section::CloudOffers => view! { <CloudOfferList /> }.into_any(),
                    Section::SocOffers => view! { <SocOfferList /> }.into_any(),
                    Section::Pricing => view! { <PricingTabs /> }.into_any(),
                }}
            </main>
        </div>
    }
}
