//! The starter kit's concrete tables.
//!
//! One place for the declarative data the demo resolves against: the button
//! component's variant spec, the English/Dutch locale and route table, and
//! the account-area message catalog.

use trellis_i18n::{Locale, LocaleTable, MessageCatalog, Messages, RouteError};
use trellis_style::{VariantError, VariantRegistry, VariantSpec};

/// The button component's variant spec: six visual variants, seven sizes.
pub fn button_spec() -> Result<VariantSpec, VariantError> {
    VariantSpec::builder()
        .base(
            "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-full \
             font-medium ring-offset-background transition-colors focus-visible:outline-none \
             focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
             disabled:pointer-events-none disabled:opacity-50",
        )
        .axis(
            "variant",
            [
                ("default", "bg-primary text-primary-foreground hover:bg-primary/90"),
                (
                    "destructive",
                    "bg-destructive text-destructive-foreground hover:bg-destructive/90",
                ),
                ("outline", "border border-border bg-background hover:bg-muted"),
                (
                    "secondary",
                    "bg-secondary text-secondary-foreground hover:bg-secondary/80",
                ),
                ("ghost", "hover:bg-muted"),
                ("link", "text-primary-dark underline-offset-4 hover:underline"),
            ],
        )
        .axis(
            "size",
            [
                ("default", "h-12 px-6 py-2 text-sm [&>svg]:size-5"),
                ("xs", "h-9 px-3 text-sm [&>svg]:size-4"),
                ("sm", "h-10 px-4 text-sm [&>svg]:size-4"),
                ("lg", "h-14 px-8 text-base [&>svg]:size-5"),
                ("icon", "size-12 [&>svg]:size-5"),
                ("icon-sm", "size-10 [&>svg]:size-4"),
                ("icon-lg", "size-14 [&>svg]:size-5"),
            ],
        )
        .default_option("variant", "default")
        .default_option("size", "default")
        .build()
}

/// Component registry with every spec the kit ships.
pub fn registry() -> Result<VariantRegistry, VariantError> {
    let mut registry = VariantRegistry::new();
    registry.register("button", button_spec()?);
    Ok(registry)
}

/// The English/Dutch locale and route table.
///
/// English is the default locale and stays unprefixed; Dutch paths get the
/// `/nl` prefix except for the authentication flows on the exclusion list.
pub fn locale_table() -> Result<LocaleTable, RouteError> {
    LocaleTable::builder("en")
        .locale(Locale::new("en", "English"))
        .locale(Locale::new("nl", "Nederlands"))
        .route("account", [("en", "/account"), ("nl", "/account")])
        .route("login", [("en", "/login"), ("nl", "/login")])
        .route(
            "memories-detail",
            [
                ("en", "/[collectionId]/memories/[slug]"),
                ("nl", "/[collectionId]/herinneringen/[slug]"),
            ],
        )
        .route(
            "memories-create",
            [
                ("en", "/[collectionId]/memories/create"),
                ("nl", "/[collectionId]/herinneringen/aanmaken"),
            ],
        )
        .route(
            "memories-edit",
            [
                ("en", "/[collectionId]/memories/[slug]/edit"),
                ("nl", "/[collectionId]/herinneringen/[slug]/bewerken"),
            ],
        )
        .route("onboarding", [("en", "/onboarding"), ("nl", "/introductie")])
        .route("pricing", [("en", "/pricing"), ("nl", "/prijzen")])
        .route(
            "confirm-registration",
            [("en", "/confirm-registration"), ("nl", "/registratie-bevestigen")],
        )
        .route(
            "password-recovery",
            [("en", "/password-recovery"), ("nl", "/wachtwoord-herstellen")],
        )
        .route("sign-up", [("en", "/sign-up"), ("nl", "/registreren")])
        .route(
            "update-password",
            [("en", "/update-password"), ("nl", "/wachtwoord-bijwerken")],
        )
        .exclude_from_prefix("/confirm-registration")
        .exclude_from_prefix("/registratie-bevestigen")
        .exclude_from_prefix("/password-recovery")
        .exclude_from_prefix("/wachtwoord-herstellen")
        .exclude_from_prefix("/sign-up")
        .exclude_from_prefix("/registreren")
        .exclude_from_prefix("/update-password")
        .exclude_from_prefix("/wachtwoord-bijwerken")
        .build()
}

/// Account-area messages in English (complete) and Dutch (partial, to show
/// fallback and the coverage report).
pub fn message_catalog() -> MessageCatalog {
    let en: Messages = [
        ("account.account", "Account"),
        ("account.manage_your_account", "Manage your account."),
        ("account.account_information.account_information", "Account Information"),
        ("account.account_information.change_password", "Change password"),
        ("account.billing.billing", "Billing"),
        ("account.billing.current_plan", "Current plan"),
        ("account.billing.view_plans", "View plans"),
        (
            "account.danger_zone.delete_account_confirmation",
            "Are you sure you want to delete your account? All your data will be lost.",
        ),
        ("account.preferences.language", "Language"),
        ("account.preferences.theme", "Theme"),
        ("account.profile.profile", "Profile | Profiles"),
        ("account.profile.welcome_to", "Welcome to {appName}!"),
        ("account.memories", "No memories | One memory | {count} memories"),
    ]
    .into_iter()
    .collect();

    let nl: Messages = [
        ("account.account", "Account"),
        ("account.manage_your_account", "Beheer je account."),
        ("account.account_information.account_information", "Accountgegevens"),
        ("account.account_information.change_password", "Wachtwoord wijzigen"),
        ("account.billing.billing", "Facturatie"),
        ("account.preferences.language", "Taal"),
        ("account.preferences.theme", "Thema"),
        ("account.profile.profile", "Profiel | Profielen"),
        ("account.profile.welcome_to", "Welkom bij {appName}!"),
    ]
    .into_iter()
    .collect();

    let mut catalog = MessageCatalog::new("en");
    catalog.add_locale("en", en);
    catalog.add_locale("nl", nl);
    catalog
}
