//! Appendable template fragments
//!
//! Partials are rendered with the run's token table and appended to shared
//! files that accumulate fragments across optional stages.

/// Start marker of the optional category-label block.
pub const FMD_CATEGORY_START: &str = "#fmdcatstart#";

/// End marker of the optional category-label block.
pub const FMD_CATEGORY_END: &str = "#fmdcatend#";

/// Doc header injected into every generated PHP file via the `#phpdoc#`
/// token. Rendered once per run.
pub const DOC_HEADER: &str = r"/**
 * #bundlename#
 *
 * @copyright #year# #authorname# <#authoremail#>
 * @author    #authorname#
 * @license   #license#
 * @link      #authorwebsite#
 * @package   #vendorname#/#repositoryname#
 */
";

/// Backend-module registration appended to the shared `config.php`.
pub const BACKEND_MODULE_FRAGMENT: &str = r"
// Backend module
$GLOBALS['BE_MOD']['custom']['#bemodule#'] = [
    'tables' => ['#dcatable#'],
];
";

/// Backend-module label appended to the shared `modules.php` locale file.
pub const BACKEND_MODULE_LANG_FRAGMENT: &str = r"
// Backend module labels
$GLOBALS['TL_LANG']['MOD']['#bemodule#'] = ['#bundlename#', 'A backend module provided by #vendorname#/#repositoryname#.'];
";

/// Frontend-module palette appended to the generated `tl_module.php`.
pub const MODULE_PALETTE_FRAGMENT: &str = r"
// Palette for the #frontendmodulename# frontend module
$GLOBALS['TL_DCA']['tl_module']['palettes']['#frontendmodulename#'] = '{title_legend},name,headline,type;{template_legend:hide},customTpl;{protected_legend:hide},protected;{expert_legend:hide},guests,cssID';
";

/// Frontend-module service registration appended to `services.yml`.
pub const MODULE_SERVICE_FRAGMENT: &str = r"
    #toplevelnamespace#\#sublevelnamespace#\Controller\FrontendModule\#frontendmoduleclassname#:
        tags:
            -
                name: contao.frontend_module
                category: #frontendmodulecategory#
                template: #frontendmoduletemplate#
                type: #frontendmodulename#
";

/// Frontend-module labels appended to `modules.php`, with the category
/// label wrapped in the optional-block markers.
pub const MODULE_LANG_FRAGMENT: &str = r"
// Frontend module labels
$GLOBALS['TL_LANG']['FMD']['#frontendmodulename#'] = ['#frontendmoduletrans_0#', '#frontendmoduletrans_1#'];
#fmdcatstart#$GLOBALS['TL_LANG']['FMD']['#frontendmodulecategory#'] = '#frontendmodulecategorytrans#';#fmdcatend#
";
