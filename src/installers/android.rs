// Android command line tools and, optionally, Android Studio.

use crate::schemas::recipe::{Probe, Recipe};
use crate::schemas::targets::Target;

// Version-dependent values. Bump together with ANDROID_INFO_UPDATED.
const ANDROID_TOOLS_URL: &str =
    "https://dl.google.com/android/repository/sdk-tools-linux-4333796.zip";
const ANDROID_SDKMANAGER_ARGS: &str = r#""build-tools;28.0.3" "emulator" "tools" "platform-tools" "platforms;android-28" "extras;google;google_play_services" "extras;google;webdriver" "system-images;android-28;google_apis_playstore;x86_64""#;
const ANDROID_STUDIO_URL: &str = "https://dl.google.com/dl/android/studio/ide-zips/3.4.1.0/android-studio-ide-183.5522156-linux.tar.gz";
const ANDROID_SETUP_DOC: &str = "https://developer.android.com/studio/#downloads";
const ANDROID_INFO_UPDATED: &str = "2019-05-30";

/// Where the SDK lives below the install root. Flutter points at it too.
pub const ANDROID_SDK_DIR: &str = "${prefix}/android-sdk";

pub fn recipe() -> Recipe {
    Recipe::new(Target::Android, "Android command line tools and SDK packages")
        .source(ANDROID_SETUP_DOC, ANDROID_INFO_UPDATED)
        .probe(Probe::PathExists(format!(
            "{ANDROID_SDK_DIR}/tools/bin/sdkmanager"
        )))
        .download(ANDROID_TOOLS_URL, "sdk-tools-linux.zip")
        .extract("sdk-tools-linux.zip", ANDROID_SDK_DIR)
        .run(format!(
            "{ANDROID_SDK_DIR}/tools/bin/sdkmanager --sdk_root={ANDROID_SDK_DIR} {ANDROID_SDKMANAGER_ARGS}"
        ))
        .append_lines(
            "${home}/.bashrc",
            &[
                r#"export ANDROID_HOME="${prefix}/android-sdk""#,
                r#"export PATH="$PATH:$ANDROID_HOME/tools/bin:$ANDROID_HOME/platform-tools""#,
            ],
        )
}

pub fn studio_recipe() -> Recipe {
    Recipe::new(Target::AndroidStudio, "Android Studio IDE")
        .source(ANDROID_SETUP_DOC, ANDROID_INFO_UPDATED)
        .probe(Probe::PathExists(
            "${prefix}/android-studio/bin/studio.sh".to_string(),
        ))
        .download(ANDROID_STUDIO_URL, "android-studio.tar.gz")
        .extract("android-studio.tar.gz", "${prefix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::tokenizer::tokenize;

    #[test]
    fn sdkmanager_packages_stay_atomic() {
        let recipe = recipe();
        let command = recipe.commands().next().unwrap();
        let tokens = tokenize(command).unwrap();
        assert!(tokens.contains(&r#""build-tools;28.0.3""#.to_string()));
        assert!(tokens.contains(&r#""system-images;android-28;google_apis_playstore;x86_64""#.to_string()));
        assert_eq!(tokens.len(), 2 + 8);
    }
}
