//! Whole-file template payloads

/// Package manifest. The version line is stripped by the generator when no
/// package version was supplied.
pub const COMPOSER_JSON: &str = r##"{
    "name": "#vendorname#/#repositoryname#",
    "description": "#composerdescription#",
    "type": "contao-bundle",
    "version": "#composerpackageversion#",
    "license": "#license#",
    "authors": [
        {
            "name": "#authorname#",
            "email": "#authoremail#",
            "homepage": "#authorwebsite#",
            "role": "Developer"
        }
    ],
    "require": {
        "php": "^7.2",
        "contao/core-bundle": "^4.4"
    },
    "autoload": {
        "psr-4": {
            "#toplevelnamespace#\\#sublevelnamespace#\\": "src/"
        }
    },
    "extra": {
        "contao-manager-plugin": "#toplevelnamespace#\\#sublevelnamespace#\\ContaoManager\\Plugin"
    }
}
"##;

/// Bundle entry-point class. Its class name and namespace come from the same
/// token table as its file path.
pub const BUNDLE_CLASS: &str = r"<?php

#phpdoc#

declare(strict_types=1);

namespace #toplevelnamespace#\#sublevelnamespace#;

use Symfony\Component\HttpKernel\Bundle\Bundle;

class #toplevelnamespace##sublevelnamespace# extends Bundle
{
}
";

/// Manager plugin class registering the bundle with the host CMS.
pub const MANAGER_PLUGIN: &str = r"<?php

#phpdoc#

declare(strict_types=1);

namespace #toplevelnamespace#\#sublevelnamespace#\ContaoManager;

use Contao\CoreBundle\ContaoCoreBundle;
use Contao\ManagerPlugin\Bundle\BundlePluginInterface;
use Contao\ManagerPlugin\Bundle\Config\BundleConfig;
use Contao\ManagerPlugin\Bundle\Parser\ParserInterface;
use #toplevelnamespace#\#sublevelnamespace#\#toplevelnamespace##sublevelnamespace#;

class Plugin implements BundlePluginInterface
{
    public function getBundles(ParserInterface $parser): array
    {
        return [
            BundleConfig::create(#toplevelnamespace##sublevelnamespace#::class)
                ->setLoadAfter([ContaoCoreBundle::class]),
        ];
    }
}
";

/// Event-listener wiring, copied verbatim.
pub const LISTENER_YML: &str = r"services:
    # Register event listeners here.
    # Example:
    # App\EventListener\ExampleListener:
    #     tags:
    #         - { name: kernel.event_listener }
";

/// Container parameters, copied verbatim.
pub const PARAMETERS_YML: &str = r"parameters:
    # Bundle parameters go here.
";

/// Service definitions. Frontend-module registrations are appended to this
/// file by the optional module stage.
pub const SERVICES_YML: &str = r"services:
    _defaults:
        autowire: true
        autoconfigure: true
        public: false
";

/// Shared CMS configuration file; optional stages append fragments here.
pub const CMS_CONFIG: &str = r"<?php

#phpdoc#

// Register backend modules, hooks and models below.
";

/// Shared locale file for module labels; optional stages append here.
pub const MODULES_LANG: &str = r"<?php

#phpdoc#

// Backend and frontend module labels.
";

/// DB-table descriptor, written under the user-supplied table name.
pub const DCA_TABLE: &str = r#"<?php

#phpdoc#

$GLOBALS['TL_DCA']['#dcatable#'] = [
    'config' => [
        'dataContainer' => 'Table',
        'enableVersioning' => true,
        'sql' => [
            'keys' => [
                'id' => 'primary',
            ],
        ],
    ],
    'list' => [
        'sorting' => [
            'mode' => 2,
            'fields' => ['title'],
            'flag' => 1,
        ],
        'label' => [
            'fields' => ['title'],
            'format' => '%s',
        ],
    ],
    'palettes' => [
        'default' => '{title_legend},title',
    ],
    'fields' => [
        'id' => [
            'sql' => 'int(10) unsigned NOT NULL auto_increment',
        ],
        'tstamp' => [
            'sql' => "int(10) unsigned NOT NULL default '0'",
        ],
        'title' => [
            'inputType' => 'text',
            'exclude' => true,
            'search' => true,
            'eval' => ['mandatory' => true, 'maxlength' => 255],
            'sql' => "varchar(255) NOT NULL default ''",
        ],
    ],
];
"#;

/// Locale file for the DB-table descriptor.
pub const DCA_TABLE_LANG: &str = r"<?php

#phpdoc#

$GLOBALS['TL_LANG']['#dcatable#']['title_legend'] = 'Title settings';
$GLOBALS['TL_LANG']['#dcatable#']['title'] = ['Title', 'Please enter a title.'];
$GLOBALS['TL_LANG']['#dcatable#']['new'] = ['New', 'Create a new record'];
";

/// Base `tl_module.php`; the palette fragment is appended below it.
pub const TL_MODULE_DCA: &str = r"<?php

#phpdoc#
";

/// Frontend-module controller class.
pub const FRONTEND_MODULE_CLASS: &str = r"<?php

#phpdoc#

declare(strict_types=1);

namespace #toplevelnamespace#\#sublevelnamespace#\Controller\FrontendModule;

use Contao\CoreBundle\Controller\FrontendModule\AbstractFrontendModuleController;
use Contao\ModuleModel;
use Contao\Template;
use Symfony\Component\HttpFoundation\Request;
use Symfony\Component\HttpFoundation\Response;

class #frontendmoduleclassname# extends AbstractFrontendModuleController
{
    protected function getResponse(Template $template, ModuleModel $model, Request $request): ?Response
    {
        $template->text = 'Hello from #frontendmoduleclassname#';

        return $template->getResponse();
    }
}
";

/// Frontend-module view template, copied verbatim under its derived name.
pub const MODULE_TEMPLATE_HTML5: &str = r#"<div class="<?= $this->class ?> block"<?= $this->cssID ?>>

  <?php if ($this->headline): ?>
    <<?= $this->hl ?>><?= $this->headline ?></<?= $this->hl ?>>
  <?php endif; ?>

  <p><?= $this->text ?></p>

</div>
"#;

/// Bundle README. Copied verbatim, tokens and all: sibling documentation is
/// substituted but this file historically is not, and generated trees are
/// compared against that behavior.
pub const README_MD: &str = r"# #bundlename#

An extension bundle scaffolded with bundlesmith.

## Installation

Require the package in your project and let the manager plugin register the
bundle:

```bash
composer require #vendorname#/#repositoryname#
```

## Structure

```
src/
├── ContaoManager/        # Manager plugin
├── Controller/           # Frontend module controllers
├── EventListener/        # Hooks and listeners
└── Resources/            # Config, assets, locales, templates
```
";

/// Placeholder logo asset (1x1 transparent PNG), copied verbatim.
pub const LOGO_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];
