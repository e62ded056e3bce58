// Flutter SDK from the stable branch of the git repository.

use crate::installers::android::ANDROID_SDK_DIR;
use crate::schemas::recipe::{Probe, Recipe};
use crate::schemas::targets::Target;

const FLUTTER_REPO: &str = "https://github.com/flutter/flutter.git";
const FLUTTER_SETUP_DOC: &str = "https://flutter.dev/docs/development/tools/sdk/releases";
const FLUTTER_INFO_UPDATED: &str = "2019-05-30";

pub fn recipe() -> Recipe {
    Recipe::new(Target::Flutter, "Flutter SDK (stable channel)")
        .source(FLUTTER_SETUP_DOC, FLUTTER_INFO_UPDATED)
        .probe(Probe::PathExists("${prefix}/flutter/bin/flutter".to_string()))
        .run(format!(
            "git clone -b stable {FLUTTER_REPO} ${{prefix}}/flutter"
        ))
        .run(format!(
            "${{prefix}}/flutter/bin/flutter config --android-sdk {ANDROID_SDK_DIR}"
        ))
        .run("${prefix}/flutter/bin/flutter precache")
        .append_lines(
            "${home}/.bashrc",
            &[r#"export PATH="$PATH:${prefix}/flutter/bin""#],
        )
}
