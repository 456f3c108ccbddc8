use folder_insights_common::InsightsError;

/// 文件元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    pub size: u64,
    /// Unix 时间戳（毫秒）
    pub last_modified: Option<u64>,
}

/// 目录子项：目录或文件，二者只暴露各自支持的操作
pub enum Entry<D: DirectoryHandle> {
    Directory(D),
    File(D::File),
}

impl<D: DirectoryHandle> Entry<D> {
    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }
}

/// 一次目录枚举的结果：可用的子项，以及宿主无法识别、只能跳过的条目错误
pub struct Listing<D: DirectoryHandle> {
    pub entries: Vec<(String, Entry<D>)>,
    pub skipped: Vec<InsightsError>,
}

impl<D: DirectoryHandle> Listing<D> {
    pub fn new(entries: Vec<(String, Entry<D>)>) -> Self {
        Self {
            entries,
            skipped: Vec::new(),
        }
    }
}

pub trait FileHandle {
    fn metadata(&self) -> Result<FileMeta, InsightsError>;

    /// 读取完整文本内容
    fn read_text(&self) -> Result<String, InsightsError>;
}

/// 能力句柄：引擎只通过该接口访问目录树（列出子项、按名打开子目录/文件），
/// 不依赖具体的宿主文件系统 API。
pub trait DirectoryHandle: Sized {
    type File: FileHandle;

    /// 列出直接子项 (名称, 句柄)，顺序由宿主决定
    fn entries(&self) -> Result<Listing<Self>, InsightsError>;

    /// 按名称打开子目录
    fn directory(&self, name: &str) -> Result<Self, InsightsError>;

    /// 按名称打开子文件
    fn file(&self, name: &str) -> Result<Self::File, InsightsError>;
}

/// 按 `/` 分隔的相对路径从根目录重新定位文件句柄
pub fn resolve_file<D: DirectoryHandle>(root: &D, path: &str) -> Result<D::File, InsightsError> {
    let mut parts: Vec<&str> = path.split('/').collect();
    let file_name = match parts.pop() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(InsightsError::InvalidPath(path.to_string())),
    };

    let mut owned: Option<D> = None;
    for part in parts {
        let next = match &owned {
            Some(dir) => dir.directory(part)?,
            None => root.directory(part)?,
        };
        owned = Some(next);
    }

    match &owned {
        Some(dir) => dir.file(file_name),
        None => root.file(file_name),
    }
}
