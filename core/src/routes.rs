//! Static endpoint table.
//!
//! Every remote endpoint is one `Route` row: method, path template, and the
//! caller-visible payload fields extracted from the envelope's `result`. Each
//! field carries its own empty shape, returned in place of the payload when
//! the remote service reports a failure, or when a successful payload is
//! missing or of the wrong JSON type. Empty shapes follow what callers of
//! each endpoint have always received (`[]`, `{}` or `null`) and are
//! deliberately not unified.

use serde_json::Value;

use crate::http::HttpMethod;

/// Value a payload field takes when the call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Empty {
    List,
    Object,
    Null,
}

impl Empty {
    pub fn value(self) -> Value {
        match self {
            Empty::List => Value::Array(Vec::new()),
            Empty::Object => Value::Object(serde_json::Map::new()),
            Empty::Null => Value::Null,
        }
    }

    /// `value` if it has this shape, otherwise the empty value. `Null`
    /// fields accept anything.
    pub fn fit(self, value: Value) -> Value {
        let fits = match self {
            Empty::List => value.is_array(),
            Empty::Object => value.is_object(),
            Empty::Null => true,
        };
        if fits {
            value
        } else {
            self.value()
        }
    }
}

/// Where a payload field's value comes from on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The whole envelope `result`.
    Result,
    /// A named member of an object `result`.
    Member(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub source: Source,
    pub empty: Empty,
}

const fn whole(name: &'static str, empty: Empty) -> Field {
    Field {
        name,
        source: Source::Result,
        empty,
    }
}

const fn member(name: &'static str, key: &'static str, empty: Empty) -> Field {
    Field {
        name,
        source: Source::Member(key),
        empty,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base URL; `{name}` placeholders are filled at
    /// build time.
    pub path: &'static str,
    pub fields: &'static [Field],
    pub paged: bool,
}

const fn route(
    name: &'static str,
    method: HttpMethod,
    path: &'static str,
    fields: &'static [Field],
) -> Route {
    Route {
        name,
        method,
        path,
        fields,
        paged: false,
    }
}

const fn paged(
    name: &'static str,
    method: HttpMethod,
    path: &'static str,
    fields: &'static [Field],
) -> Route {
    Route {
        name,
        method,
        path,
        fields,
        paged: true,
    }
}

use Empty::{List, Null, Object};
use HttpMethod::{Delete, Get, Post, Put};

const SYNC_PRODUCT_AND_VARIANTS: &[Field] = &[
    member("sync_product", "sync_product", Object),
    member("sync_variants", "sync_variants", List),
];

const SYNC_VARIANT_AND_PRODUCT: &[Field] = &[
    member("sync_variant", "sync_variant", Object),
    member("sync_product", "sync_product", Object),
];

const ORDER: &[Field] = &[whole("order", Object)];

pub mod catalog {
    use super::*;

    pub const GET_PRODUCTS: Route =
        route("getProducts", Get, "/products", &[whole("products", List)]);
    pub const GET_VARIANT: Route = route(
        "getVariant",
        Get,
        "/products/variant/{id}",
        &[
            member("variant", "variant", Object),
            member("product", "product", Object),
        ],
    );
    pub const GET_PRODUCT: Route = route(
        "getProduct",
        Get,
        "/products/{id}",
        &[
            member("product", "product", Object),
            member("variants", "variants", List),
        ],
    );
    pub const GET_CATEGORIES: Route = route(
        "getCategories",
        Get,
        "/categories",
        &[member("categories", "categories", List)],
    );
    pub const GET_CATEGORY: Route = route(
        "getCategory",
        Get,
        "/categories/{id}",
        &[member("category", "category", Object)],
    );
    pub const GET_PRODUCT_SIZE_GUIDE: Route = route(
        "getProductSizeGuide",
        Get,
        "/products/{id}/sizes",
        &[member("size_tables", "size_tables", List)],
    );
}

pub mod products {
    use super::*;

    pub const GET_SYNC_PRODUCTS: Route = paged(
        "getSyncProducts",
        Get,
        "/store/products",
        &[whole("products", List)],
    );
    pub const CREATE_SYNC_PRODUCT: Route = route(
        "createSyncProduct",
        Post,
        "/store/products",
        &[whole("sync_product", Object)],
    );
    pub const GET_SYNC_PRODUCT: Route = route(
        "getSyncProduct",
        Get,
        "/store/products/{id}",
        SYNC_PRODUCT_AND_VARIANTS,
    );
    pub const MODIFY_SYNC_PRODUCT: Route = route(
        "modifySyncProduct",
        Put,
        "/store/products/{id}",
        &[whole("sync_product", Object)],
    );
    pub const DELETE_SYNC_PRODUCT: Route = route(
        "deleteSyncProduct",
        Delete,
        "/store/products/{id}",
        SYNC_PRODUCT_AND_VARIANTS,
    );
    pub const CREATE_SYNC_VARIANT: Route = route(
        "createSyncVariant",
        Post,
        "/store/products/{id}/variants",
        &[whole("sync_variant", Object)],
    );
    pub const GET_SYNC_VARIANT: Route = route(
        "getSyncVariant",
        Get,
        "/store/variants/{id}",
        &[member("sync_variant", "sync_variant", Object)],
    );
    pub const MODIFY_SYNC_VARIANT: Route = route(
        "modifySyncVariant",
        Put,
        "/store/variants/{id}",
        &[whole("sync_variant", Object)],
    );
    pub const DELETE_SYNC_VARIANT: Route = route(
        "deleteSyncVariant",
        Delete,
        "/store/variants/{id}",
        &[whole("sync_variant", Null)],
    );
}

pub mod templates {
    use super::*;

    pub const GET_PRODUCT_TEMPLATES: Route = paged(
        "getProductTemplates",
        Get,
        "/product-templates",
        &[member("templates", "items", List)],
    );
    pub const GET_PRODUCT_TEMPLATE: Route = route(
        "getProductTemplate",
        Get,
        "/product-templates/{id}",
        &[whole("template", Object)],
    );
    pub const DELETE_PRODUCT_TEMPLATE: Route = route(
        "deleteProductTemplate",
        Delete,
        "/product-templates/{id}",
        &[whole("success", Null)],
    );
}

pub mod orders {
    use super::*;

    pub const GET_ORDERS: Route = paged("getOrders", Get, "/orders", &[whole("orders", List)]);
    pub const CREATE_ORDER: Route = route("createOrder", Post, "/orders", ORDER);
    pub const GET_ORDER: Route = route("getOrder", Get, "/orders/{id}", ORDER);
    pub const CANCEL_ORDER: Route = route("cancelOrder", Delete, "/orders/{id}", ORDER);
    pub const UPDATE_ORDER: Route = route("updateOrder", Put, "/orders/{id}", ORDER);
    pub const CONFIRM_ORDER: Route = route("confirmOrder", Post, "/orders/{id}/confirm", ORDER);
    pub const ESTIMATE_ORDER_COSTS: Route = route(
        "estimateOrderCosts",
        Post,
        "/orders/estimate-costs",
        &[
            member("costs", "costs", Object),
            member("retail_costs", "retail_costs", Object),
        ],
    );
}

pub mod files {
    use super::*;

    pub const GET_FILES: Route = paged("getFiles", Get, "/files", &[whole("files", List)]);
    pub const ADD_FILE: Route = route("addFile", Post, "/files", &[whole("file", Object)]);
    pub const GET_FILE: Route = route("getFile", Get, "/files/{id}", &[whole("file", Object)]);
    pub const GET_THREAD_COLORS: Route = route(
        "getThreadColors",
        Post,
        "/files/thread-colors",
        &[member("thread_colors", "thread_colors", List)],
    );
}

pub mod shipping {
    use super::*;

    pub const CALCULATE_SHIPPING_RATES: Route = route(
        "calculateShippingRates",
        Post,
        "/shipping/rates",
        &[whole("rates", List)],
    );
}

pub mod countries {
    use super::*;

    pub const GET_COUNTRIES: Route =
        route("getCountries", Get, "/countries", &[whole("countries", List)]);
}

pub mod tax {
    use super::*;

    pub const GET_TAX_COUNTRIES: Route = route(
        "getTaxCountries",
        Get,
        "/tax/countries",
        &[whole("countries", List)],
    );
    pub const CALCULATE_TAX_RATE: Route =
        route("calculateTaxRate", Post, "/tax/rates", &[whole("tax", Object)]);
}

pub mod mockups {
    use super::*;

    pub const CREATE_MOCKUP_TASK: Route = route(
        "createMockupTask",
        Post,
        "/mockup-generator/create-task/{id}",
        &[whole("task", Object)],
    );
    pub const GET_MOCKUP_TASK: Route = route(
        "getMockupTask",
        Get,
        "/mockup-generator/task",
        &[whole("task", Object)],
    );
    pub const GET_PRINTFILES: Route = route(
        "getPrintfiles",
        Get,
        "/mockup-generator/printfiles/{id}",
        &[whole("printfiles", Object)],
    );
    pub const GET_LAYOUT_TEMPLATES: Route = route(
        "getLayoutTemplates",
        Get,
        "/mockup-generator/templates/{id}",
        &[whole("templates", Object)],
    );
}

pub mod webhooks {
    use super::*;

    pub const GET_WEBHOOKS: Route =
        route("getWebhooks", Get, "/webhooks", &[whole("webhook", Object)]);
    pub const SET_WEBHOOKS: Route =
        route("setWebhooks", Post, "/webhooks", &[whole("webhook", Object)]);
    pub const DISABLE_WEBHOOKS: Route =
        route("disableWebhooks", Delete, "/webhooks", &[whole("webhook", Object)]);
}

pub mod stores {
    use super::*;

    pub const GET_STORES: Route = route("getStores", Get, "/stores", &[whole("stores", List)]);
    pub const GET_STORE: Route = route("getStore", Get, "/stores/{id}", &[whole("store", Object)]);
    pub const CHANGE_PACKING_SLIP: Route = route(
        "changePackingSlip",
        Post,
        "/store/packing-slip",
        &[member("packing_slip", "packing_slip", Object)],
    );
}

pub mod sync {
    use super::*;

    pub const GET_PLATFORM_SYNC_PRODUCTS: Route = paged(
        "getPlatformSyncProducts",
        Get,
        "/sync/products",
        &[whole("products", List)],
    );
    pub const GET_PLATFORM_SYNC_PRODUCT: Route = route(
        "getPlatformSyncProduct",
        Get,
        "/sync/products/{id}",
        SYNC_PRODUCT_AND_VARIANTS,
    );
    pub const DELETE_PLATFORM_SYNC_PRODUCT: Route = route(
        "deletePlatformSyncProduct",
        Delete,
        "/sync/products/{id}",
        SYNC_PRODUCT_AND_VARIANTS,
    );
    pub const GET_PLATFORM_SYNC_VARIANT: Route = route(
        "getPlatformSyncVariant",
        Get,
        "/sync/variant/{id}",
        SYNC_VARIANT_AND_PRODUCT,
    );
    pub const MODIFY_PLATFORM_SYNC_VARIANT: Route = route(
        "modifyPlatformSyncVariant",
        Put,
        "/sync/variant/{id}",
        SYNC_VARIANT_AND_PRODUCT,
    );
    pub const DELETE_PLATFORM_SYNC_VARIANT: Route = route(
        "deletePlatformSyncVariant",
        Delete,
        "/sync/variant/{id}",
        SYNC_VARIANT_AND_PRODUCT,
    );
}

pub mod warehouse {
    use super::*;

    pub const GET_WAREHOUSE_PRODUCTS: Route = paged(
        "getWarehouseProducts",
        Get,
        "/warehouse/products",
        &[whole("products", List)],
    );
    pub const GET_WAREHOUSE_PRODUCT: Route = route(
        "getWarehouseProduct",
        Get,
        "/warehouse/products/{id}",
        &[whole("product", Object)],
    );
}

pub mod reports {
    use super::*;

    pub const GET_STATISTICS: Route = route(
        "getStatistics",
        Get,
        "/reports/statistics",
        &[member("store_statistics", "store_statistics", List)],
    );
}

pub mod approval_sheets {
    use super::*;

    pub const GET_APPROVAL_SHEETS: Route =
        route("getApprovalSheets", Get, "/approval-sheets", &[whole("sheets", List)]);
    pub const APPROVE_DESIGN: Route =
        route("approveDesign", Post, "/approval-sheets", &[whole("sheet", Object)]);
    pub const SUBMIT_CHANGES_TO_DESIGN: Route = route(
        "submitChangesToDesign",
        Post,
        "/approval-sheets/changes",
        ORDER,
    );
}

pub mod oauth {
    use super::*;

    pub const GET_SCOPES: Route = route(
        "getScopes",
        Get,
        "/oauth/scopes",
        &[member("scopes", "scopes", List)],
    );
}

/// Every route, grouped by resource area.
pub const ALL: &[&Route] = &[
    &catalog::GET_PRODUCTS,
    &catalog::GET_VARIANT,
    &catalog::GET_PRODUCT,
    &catalog::GET_CATEGORIES,
    &catalog::GET_CATEGORY,
    &catalog::GET_PRODUCT_SIZE_GUIDE,
    &products::GET_SYNC_PRODUCTS,
    &products::CREATE_SYNC_PRODUCT,
    &products::GET_SYNC_PRODUCT,
    &products::MODIFY_SYNC_PRODUCT,
    &products::DELETE_SYNC_PRODUCT,
    &products::CREATE_SYNC_VARIANT,
    &products::GET_SYNC_VARIANT,
    &products::MODIFY_SYNC_VARIANT,
    &products::DELETE_SYNC_VARIANT,
    &templates::GET_PRODUCT_TEMPLATES,
    &templates::GET_PRODUCT_TEMPLATE,
    &templates::DELETE_PRODUCT_TEMPLATE,
    &orders::GET_ORDERS,
    &orders::CREATE_ORDER,
    &orders::GET_ORDER,
    &orders::CANCEL_ORDER,
    &orders::UPDATE_ORDER,
    &orders::CONFIRM_ORDER,
    &orders::ESTIMATE_ORDER_COSTS,
    &files::GET_FILES,
    &files::ADD_FILE,
    &files::GET_FILE,
    &files::GET_THREAD_COLORS,
    &shipping::CALCULATE_SHIPPING_RATES,
    &countries::GET_COUNTRIES,
    &tax::GET_TAX_COUNTRIES,
    &tax::CALCULATE_TAX_RATE,
    &mockups::CREATE_MOCKUP_TASK,
    &mockups::GET_MOCKUP_TASK,
    &mockups::GET_PRINTFILES,
    &mockups::GET_LAYOUT_TEMPLATES,
    &webhooks::GET_WEBHOOKS,
    &webhooks::SET_WEBHOOKS,
    &webhooks::DISABLE_WEBHOOKS,
    &stores::GET_STORES,
    &stores::GET_STORE,
    &stores::CHANGE_PACKING_SLIP,
    &sync::GET_PLATFORM_SYNC_PRODUCTS,
    &sync::GET_PLATFORM_SYNC_PRODUCT,
    &sync::DELETE_PLATFORM_SYNC_PRODUCT,
    &sync::GET_PLATFORM_SYNC_VARIANT,
    &sync::MODIFY_PLATFORM_SYNC_VARIANT,
    &sync::DELETE_PLATFORM_SYNC_VARIANT,
    &warehouse::GET_WAREHOUSE_PRODUCTS,
    &warehouse::GET_WAREHOUSE_PRODUCT,
    &reports::GET_STATISTICS,
    &approval_sheets::GET_APPROVAL_SHEETS,
    &approval_sheets::APPROVE_DESIGN,
    &approval_sheets::SUBMIT_CHANGES_TO_DESIGN,
    &oauth::GET_SCOPES,
];

/// Looks a route up by its method name, e.g. `"getSyncProduct"`.
pub fn by_name(name: &str) -> Option<&'static Route> {
    ALL.iter().copied().find(|r| r.name == name)
}

impl Route {
    /// Placeholder names in the path template, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let path: &'static str = self.path;
        path.split('/')
            .filter_map(|seg| seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
    }
}
