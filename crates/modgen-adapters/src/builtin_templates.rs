//! The template library compiled into the binary.
//!
//! Every [`TemplateId`] maps to exactly one `templates/<name>.j2` source, so
//! a missing template is a compile error rather than a runtime lookup miss.

use modgen_core::application::TemplateId;
use modgen_core::domain::ScreenKind;

/// Source text for `id`.
pub fn source(id: TemplateId) -> &'static str {
    match id {
        TemplateId::PackageJson => include_str!("../templates/project/package.json.j2"),
        TemplateId::WebpackConfig => include_str!("../templates/project/webpack.config.js.j2"),
        TemplateId::ModuleEntry => include_str!("../templates/project/Module.js.j2"),
        TemplateId::CreateConfig => include_str!("../templates/configs/create.js.j2"),
        TemplateId::SearchConfig => include_str!("../templates/configs/search.js.j2"),
        TemplateId::InboxConfig => include_str!("../templates/configs/inbox.js.j2"),
        TemplateId::ViewConfig => include_str!("../templates/configs/view.js.j2"),
        TemplateId::ScreenPage(ScreenKind::Create) => include_str!("../templates/pages/create.js.j2"),
        TemplateId::ScreenPage(ScreenKind::Search) => include_str!("../templates/pages/search.js.j2"),
        TemplateId::ScreenPage(ScreenKind::Inbox) => include_str!("../templates/pages/inbox.js.j2"),
        TemplateId::ScreenPage(ScreenKind::View) => include_str!("../templates/pages/view.js.j2"),
        TemplateId::ScreenPage(ScreenKind::Response) => {
            include_str!("../templates/pages/response.js.j2")
        }
        TemplateId::CreateUtils => include_str!("../templates/utils/createUtils.js.j2"),
        TemplateId::SearchUtils => include_str!("../templates/utils/searchUtils.js.j2"),
        TemplateId::ResponseUtils => include_str!("../templates/utils/responseUtils.js.j2"),
        TemplateId::UtilsIndex => include_str!("../templates/utils/index.js.j2"),
        TemplateId::ServiceHook => include_str!("../templates/services/hook.js.j2"),
        TemplateId::ApiEndpoints => include_str!("../templates/services/apiEndpoints.js.j2"),
        TemplateId::LocalizationConfig => include_str!("../templates/localization/config.js.j2"),
        TemplateId::Readme => include_str!("../templates/docs/README.md.j2"),
        TemplateId::JestConfig => include_str!("../templates/tests/jest.config.js.j2"),
        TemplateId::TestSetup => include_str!("../templates/tests/setup.js.j2"),
        TemplateId::MockData => include_str!("../templates/tests/mockData.js.j2"),
        TemplateId::ScreenTest => include_str!("../templates/tests/screen.test.js.j2"),
        TemplateId::CreateUtilsTest => include_str!("../templates/tests/createUtils.test.js.j2"),
        TemplateId::ApiTest => include_str!("../templates/tests/api.test.js.j2"),
        TemplateId::WorkflowTest => include_str!("../templates/tests/workflow.test.js.j2"),
    }
}

/// `(name, source)` for the whole library, in [`TemplateId::ALL`] order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    TemplateId::ALL.into_iter().map(|id| (id.name(), source(id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_source() {
        for (name, source) in all() {
            assert!(!source.trim().is_empty(), "{name} is empty");
        }
        assert_eq!(all().count(), TemplateId::ALL.len());
    }
}
