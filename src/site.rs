//! Every URL, search term and selector the run depends on.
//!
//! These track one site's current markup; a layout change should only
//! need edits here.

use crate::locator::Locator;

/// Where a result entry's display name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// The full text of the entry element.
    EntryText,
    /// The text of a title element inside the entry.
    Title(Locator),
}

#[derive(Debug, Clone, Copy)]
pub struct SiteProfile {
    pub report_title: &'static str,
    pub home_url: &'static str,
    pub search_term: &'static str,
    pub region_link: Locator,
    pub search_input: Locator,
    pub overlay_dismiss: Locator,
    pub condition_filter: Locator,
    pub location_filter: Locator,
    pub sort_toggle: Locator,
    pub sort_price_desc: Locator,
    pub result_item: Locator,
    pub result_name: NameSource,
    pub result_price: Locator,
}

pub const MERCADO_LIBRE: SiteProfile = SiteProfile {
    report_title: "Reporte de Automatización - Mercado Libre",
    home_url: "https://www.mercadolibre.com/",
    search_term: "playstation 5",
    region_link: Locator::XPath("//a[contains(@href, 'mercadolibre.com.mx')]"),
    search_input: Locator::Name("as_word"),
    overlay_dismiss: Locator::XPath(
        "/html/body/div[5]/div/div/div[2]/div/div/div[2]/button[2]/span",
    ),
    condition_filter: Locator::XPath(
        "/html/body/main/div/div[2]/aside/section[2]/div[5]/ul/li[1]/a/span[1]",
    ),
    location_filter: Locator::XPath(
        "//*[@id=\"root-app\"]/div/div[2]/aside/section[2]/div[14]/ul/li[1]/a/span[1]",
    ),
    sort_toggle: Locator::XPath("//*[@id=\":R1b55ie:-display-values\"]"),
    sort_price_desc: Locator::XPath(
        "//*[@id=\":R1b55ie:-menu-list-option-price_desc\"]/div/div/span",
    ),
    result_item: Locator::Css("li.ui-search-layout__item"),
    result_name: NameSource::Title(Locator::Css("h2.ui-search-item__title")),
    result_price: Locator::Css("span.andes-money-amount__fraction"),
};
