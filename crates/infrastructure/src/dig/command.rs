use super::timeout::{TimeoutEnforcement, WRAPPER_KILL_AFTER_SECS};
use ferrous_dig_domain::QueryRequest;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Arguments for `dig @<server> <domain> <type> +noall +answer`.
///
/// Every value is passed as its own argv entry; nothing goes through a shell.
pub fn dig_args(request: &QueryRequest) -> Vec<String> {
    vec![
        format!("@{}", request.server()),
        request.domain().to_string(),
        request.record_type().as_str().to_string(),
        "+noall".to_string(),
        "+answer".to_string(),
    ]
}

pub fn build_command(
    dig: &Path,
    enforcement: &TimeoutEnforcement,
    request: &QueryRequest,
) -> Command {
    let mut command = match enforcement {
        TimeoutEnforcement::Wrapper { program } => {
            let mut command = Command::new(program);
            command
                .arg("-k")
                .arg(WRAPPER_KILL_AFTER_SECS.to_string())
                .arg(request.timeout_secs().to_string())
                .arg(dig);
            command
        }
        TimeoutEnforcement::Supervisor => Command::new(dig),
    };

    command
        .args(dig_args(request))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // Own process group so a timeout can kill dig and anything it forked.
    #[cfg(unix)]
    command.process_group(0);

    command
}
