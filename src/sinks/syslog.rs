//! Syslog sink for routing records to the platform system log.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in
//! a dedicated syslog crate, keeping the dependency graph minimal. When the
//! platform's well-known log socket exists the sink connects to it directly
//! with a datagram socket; otherwise it falls back to syslog(3).

use crate::core::{Formatter, LogError, LogRecord, Result, Sink};
use std::ffi::CString;
use std::fmt;
use std::os::unix::net::UnixDatagram;
use std::path::Path;
use std::sync::OnceLock;

/// Well-known log socket paths probed in order at construction.
const LOG_SOCKET_PATHS: [&str; 2] = ["/dev/log", "/var/run/syslog"];

/// Syslog facility codes matching the POSIX syslog(3) constants.
///
/// Facility values already carry the `<< 3` shift from `<syslog.h>`, so a
/// wire priority is `facility | severity`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum Facility {
    /// User-level messages (LOG_USER).
    User = libc::LOG_USER,
    /// System daemons (LOG_DAEMON), the default.
    Daemon = libc::LOG_DAEMON,
    /// Reserved for local use (LOG_LOCAL0..LOG_LOCAL7).
    Local0 = libc::LOG_LOCAL0,
    Local1 = libc::LOG_LOCAL1,
    Local2 = libc::LOG_LOCAL2,
    Local3 = libc::LOG_LOCAL3,
    Local4 = libc::LOG_LOCAL4,
    Local5 = libc::LOG_LOCAL5,
    Local6 = libc::LOG_LOCAL6,
    Local7 = libc::LOG_LOCAL7,
}

impl Facility {
    /// Parses a facility name into the corresponding constant.
    ///
    /// Names are case-insensitive. Returns `None` for unrecognised names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl Default for Facility {
    fn default() -> Self {
        Self::Daemon
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum Transport {
    /// Datagrams sent straight to the local log socket.
    Socket(UnixDatagram),
    /// syslog(3) via openlog/syslog.
    Native,
    Closed,
}

/// Sink routing records to the platform system log.
///
/// The logger name doubles as the syslog tag. Construction probes the
/// well-known socket paths; a present-but-unconnectable socket is a
/// construction failure, not a fallback case.
pub struct SyslogSink {
    tag: String,
    facility: Facility,
    transport: Transport,
}

impl SyslogSink {
    pub fn new(tag: impl Into<String>, facility: Facility) -> Result<Self> {
        let tag = tag.into();

        for path in LOG_SOCKET_PATHS {
            if Path::new(path).exists() {
                let socket = UnixDatagram::unbound()
                    .map_err(|e| LogError::syslog(format!("cannot create socket: {}", e)))?;
                socket.connect(path).map_err(|e| {
                    LogError::syslog(format!("cannot connect to {}: {}", path, e))
                })?;
                return Ok(Self {
                    tag,
                    facility,
                    transport: Transport::Socket(socket),
                });
            }
        }

        open_native(&tag, facility);
        Ok(Self {
            tag,
            facility,
            transport: Transport::Native,
        })
    }

    pub const fn facility(&self) -> Facility {
        self.facility
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Sink for SyslogSink {
    fn write(&mut self, record: &LogRecord, formatter: &Formatter) -> Result<()> {
        let line = formatter.render(record);
        let priority = record.severity.syslog_priority();

        match &self.transport {
            Transport::Socket(socket) => {
                // RFC 3164 framing; the facility constant already carries
                // the shifted bits, matching openlog's LOG_PID output shape.
                let datagram = format!(
                    "<{}>{}[{}]: {}",
                    self.facility as libc::c_int | priority,
                    self.tag,
                    std::process::id(),
                    line
                );
                socket
                    .send(datagram.as_bytes())
                    .map_err(|e| LogError::syslog(format!("send failed: {}", e)))?;
                Ok(())
            }
            Transport::Native => {
                native_message(priority, &line);
                Ok(())
            }
            Transport::Closed => Err(LogError::syslog("sink already closed")),
        }
    }

    fn flush(&mut self) -> Result<()> {
        // Datagram sends and syslog(3) are unbuffered on our side.
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.transport, Transport::Closed) {
            Transport::Socket(socket) => drop(socket),
            Transport::Native => {
                // SAFETY: closelog has no preconditions beyond a prior
                // openlog, which Transport::Native guarantees.
                unsafe { libc::closelog() };
            }
            Transport::Closed => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }
}

/// Open the native syslog connection with the given tag and facility.
fn open_native(tag: &str, facility: Facility) {
    // syslog(3) stores the ident pointer internally, so the CString must
    // live for the rest of the process.
    static IDENT: OnceLock<CString> = OnceLock::new();
    let ident = IDENT.get_or_init(|| {
        CString::new(tag).unwrap_or_else(|_| {
            CString::new("dbglog").expect("default tag contains no NUL bytes")
        })
    });

    // SAFETY: the ident pointer is valid for the process lifetime because
    // it is stored in a static `OnceLock<CString>`.
    unsafe {
        libc::openlog(ident.as_ptr(), libc::LOG_PID, facility as libc::c_int);
    }
}

/// Send one message through syslog(3).
fn native_message(priority: libc::c_int, message: &str) {
    // syslog(3) interprets `%` as a format specifier. Routing the message
    // through "%s" avoids format string injection.
    let c_message = match CString::new(message) {
        Ok(s) => s,
        Err(_) => return,
    };
    let format = b"%s\0".as_ptr().cast::<libc::c_char>();

    // SAFETY: both pointers are valid NUL-terminated C strings, and syslog
    // is safe to call from multiple threads once openlog has completed.
    unsafe {
        libc::syslog(priority, format, c_message.as_ptr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Severity, TimestampFormat};

    #[test]
    fn test_default_facility_is_daemon() {
        assert_eq!(Facility::default(), Facility::Daemon);
    }

    #[test]
    fn test_from_name_round_trips() {
        let facilities = [
            Facility::User,
            Facility::Daemon,
            Facility::Local0,
            Facility::Local3,
            Facility::Local7,
        ];
        for facility in facilities {
            assert_eq!(Facility::from_name(facility.as_str()), Some(facility));
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Facility::from_name("DAEMON"), Some(Facility::Daemon));
        assert_eq!(Facility::from_name("Local5"), Some(Facility::Local5));
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(Facility::from_name("kernel"), None);
        assert_eq!(Facility::from_name(""), None);
        assert_eq!(Facility::from_name("local8"), None);
    }

    #[test]
    fn test_facility_values_match_libc_constants() {
        assert_eq!(Facility::User as i32, libc::LOG_USER);
        assert_eq!(Facility::Daemon as i32, libc::LOG_DAEMON);
        assert_eq!(Facility::Local0 as i32, libc::LOG_LOCAL0);
        assert_eq!(Facility::Local7 as i32, libc::LOG_LOCAL7);
    }

    #[test]
    fn test_sink_lifecycle() {
        let mut sink = SyslogSink::new("dbglog-test", Facility::Daemon).expect("open syslog");
        assert_eq!(sink.name(), "syslog");
        assert_eq!(sink.tag(), "dbglog-test");

        let formatter = Formatter::new("dbglog-test", true, TimestampFormat::Unix);
        let record = LogRecord::new(Severity::Info, 0, "test_fn", "syslog sink test", &[]);
        sink.write(&record, &formatter).expect("write");
        sink.close().expect("close");

        // Writes after close are rejected, not silently dropped.
        assert!(sink.write(&record, &formatter).is_err());
    }
}
