//! The closed set of nominal built-in classes (§3.1).

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinClass {
    TextFile,
    BinaryFile,
    Time,
    Date,
    Process,
    TcpListener,
    TcpStream,
    UdpSocket,
    Random,
    Uuid,
}

impl BuiltinClass {
    pub const ALL: [BuiltinClass; 10] = [
        Self::TextFile,
        Self::BinaryFile,
        Self::Time,
        Self::Date,
        Self::Process,
        Self::TcpListener,
        Self::TcpStream,
        Self::UdpSocket,
        Self::Random,
        Self::Uuid,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TextFile => "TextFile",
            Self::BinaryFile => "BinaryFile",
            Self::Time => "Time",
            Self::Date => "Date",
            Self::Process => "Process",
            Self::TcpListener => "TcpListener",
            Self::TcpStream => "TcpStream",
            Self::UdpSocket => "UdpSocket",
            Self::Random => "Random",
            Self::Uuid => "UUID",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}
