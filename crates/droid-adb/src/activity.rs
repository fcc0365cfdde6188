//! Activity name candidate generation
//!
//! Users configure activities in several spellings: a bare class name
//! (`MainActivity`), a package-relative name (`.MainActivity`), or a fully
//! qualified name that may live under a different package than the
//! application id (activity aliases, flavored builds). The device only
//! accepts a name that matches the manifest, so callers try each candidate
//! in order until one resolves.

use tracing::debug;

/// Build the ordered list of activity names worth trying for `pkg`
///
/// The first candidate is the most specific. The original `activity` is
/// always present verbatim. Exact duplicates are collapsed, keeping the
/// first occurrence; distinct spellings of the same class are all kept.
///
/// # Examples
/// ```
/// use droid_adb::possible_activity_names;
///
/// let names = possible_activity_names("com.example", "com.example.ui.Main");
/// assert_eq!(names, vec!["com.example.ui.Main", ".ui.Main"]);
///
/// let names = possible_activity_names("com.example", "Main");
/// assert_eq!(names, vec![".Main", "Main"]);
/// ```
pub fn possible_activity_names(pkg: &str, activity: &str) -> Vec<String> {
    let mut names = Vec::new();

    if let Some(short) = strip_package(pkg, activity) {
        // Fully qualified under this package
        push_unique(&mut names, activity.to_string());
        if !short.is_empty() {
            push_unique(&mut names, format!(".{short}"));
        }
    } else if activity.starts_with('.') {
        // Already relative
        push_unique(&mut names, activity.to_string());
        if !pkg.is_empty() && activity.len() > 1 {
            push_unique(&mut names, format!("{pkg}{activity}"));
        }
    } else if !activity.contains('.') {
        // Bare class name
        if !activity.is_empty() {
            push_unique(&mut names, format!(".{activity}"));
        }
        push_unique(&mut names, activity.to_string());
    } else {
        // Qualified, but not under `pkg`: either another package's class or
        // a relative path missing its leading dot. Keep the original first.
        push_unique(&mut names, activity.to_string());
        push_unique(&mut names, format!(".{activity}"));
    }

    debug!("Activity candidates for {}/{}: {:?}", pkg, activity, names);
    names
}

/// Strip `pkg.` from the front of `activity` on an exact dot boundary
fn strip_package<'a>(pkg: &str, activity: &'a str) -> Option<&'a str> {
    if pkg.is_empty() {
        return None;
    }
    activity.strip_prefix(pkg)?.strip_prefix('.')
}

fn push_unique(names: &mut Vec<String>, candidate: String) {
    if !names.contains(&candidate) {
        names.push(candidate);
    }
}
