use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ServerInfoQuery {
    pub server: Server,
    pub info: Info,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Server {
    pub localurl: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Info {
    pub versions: InfoVersions,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InfoVersions {
    pub core: InfoVersionsCore,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InfoVersionsCore {
    pub unraid: String,
}
