//! Identifiers for the built-in template library.

use std::fmt;

use crate::domain::ScreenKind;

/// One template in the library. The adapter maps each id to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    PackageJson,
    WebpackConfig,
    ModuleEntry,
    CreateConfig,
    SearchConfig,
    InboxConfig,
    ViewConfig,
    ScreenPage(ScreenKind),
    CreateUtils,
    SearchUtils,
    ResponseUtils,
    UtilsIndex,
    ServiceHook,
    ApiEndpoints,
    LocalizationConfig,
    Readme,
    JestConfig,
    TestSetup,
    MockData,
    ScreenTest,
    CreateUtilsTest,
    ApiTest,
    WorkflowTest,
}

impl TemplateId {
    /// Every template, in library order.
    pub const ALL: [TemplateId; 27] = [
        Self::PackageJson,
        Self::WebpackConfig,
        Self::ModuleEntry,
        Self::CreateConfig,
        Self::SearchConfig,
        Self::InboxConfig,
        Self::ViewConfig,
        Self::ScreenPage(ScreenKind::Create),
        Self::ScreenPage(ScreenKind::Search),
        Self::ScreenPage(ScreenKind::Inbox),
        Self::ScreenPage(ScreenKind::View),
        Self::ScreenPage(ScreenKind::Response),
        Self::CreateUtils,
        Self::SearchUtils,
        Self::ResponseUtils,
        Self::UtilsIndex,
        Self::ServiceHook,
        Self::ApiEndpoints,
        Self::LocalizationConfig,
        Self::Readme,
        Self::JestConfig,
        Self::TestSetup,
        Self::MockData,
        Self::ScreenTest,
        Self::CreateUtilsTest,
        Self::ApiTest,
        Self::WorkflowTest,
    ];

    /// The configuration template for a screen kind, if it has one.
    pub const fn screen_config(kind: ScreenKind) -> Option<Self> {
        match kind {
            ScreenKind::Create => Some(Self::CreateConfig),
            ScreenKind::Search => Some(Self::SearchConfig),
            ScreenKind::Inbox => Some(Self::InboxConfig),
            ScreenKind::View => Some(Self::ViewConfig),
            ScreenKind::Response => None,
        }
    }

    /// Stable name used as the engine's template key and in errors.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PackageJson => "project/package.json",
            Self::WebpackConfig => "project/webpack.config.js",
            Self::ModuleEntry => "project/Module.js",
            Self::CreateConfig => "configs/create.js",
            Self::SearchConfig => "configs/search.js",
            Self::InboxConfig => "configs/inbox.js",
            Self::ViewConfig => "configs/view.js",
            Self::ScreenPage(ScreenKind::Create) => "pages/create.js",
            Self::ScreenPage(ScreenKind::Search) => "pages/search.js",
            Self::ScreenPage(ScreenKind::Inbox) => "pages/inbox.js",
            Self::ScreenPage(ScreenKind::View) => "pages/view.js",
            Self::ScreenPage(ScreenKind::Response) => "pages/response.js",
            Self::CreateUtils => "utils/createUtils.js",
            Self::SearchUtils => "utils/searchUtils.js",
            Self::ResponseUtils => "utils/responseUtils.js",
            Self::UtilsIndex => "utils/index.js",
            Self::ServiceHook => "services/hook.js",
            Self::ApiEndpoints => "services/apiEndpoints.js",
            Self::LocalizationConfig => "localization/config.js",
            Self::Readme => "docs/README.md",
            Self::JestConfig => "tests/jest.config.js",
            Self::TestSetup => "tests/setup.js",
            Self::MockData => "tests/mockData.js",
            Self::ScreenTest => "tests/screen.test.js",
            Self::CreateUtilsTest => "tests/createUtils.test.js",
            Self::ApiTest => "tests/api.test.js",
            Self::WorkflowTest => "tests/workflow.test.js",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
