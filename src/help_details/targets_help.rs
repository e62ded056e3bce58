// Long `--help` text describing every target.

pub const TARGETS_HELP: &str = "\
Headless installation of several development tools.

TARGETS

vscode
        Visual Studio Code editor. To include the SyncSettings extension, use
        the --code-settings-gist and --code-settings-token arguments.
flutter
        Installs Flutter from the git repo. Also installs the \"android\" target.
android
        Installs the Android command line tools, without Android Studio.
android-studio
        Android installs will include Android Studio.
node
        Installs nvm and the latest version of node/npm.
data-science
        Synonym for the \"anaconda\" and \"pycharm\" targets.
anaconda
        Installs the anaconda data science package for python. Includes an
        optimized version of python, pip, jupyter, and many packages used by the
        scientific community.
miniconda
        Stripped version of anaconda that doesn't pre-install packages.
pip
        Installs pip for Python 3.
pycharm
        Installs PyCharm Community Edition.
chromeos
        Additional functionality for ChromeOS devices. Symlinks the ChromeOS
        Downloads folder to ~/Downloads when it is shared with Linux, adds bash
        aliases for ll and la.

Targets already present on the machine are skipped unless --force is given.
Unknown target names are rejected before anything is installed.";
