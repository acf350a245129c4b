use serde::{Deserialize, Serialize};

/// Категории облачных решений, по которым строится форма предложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Solution {
    Vmware,
    Huawei,
    Staas,
    Baas,
    Draas,
    Office365,
    Colocation,
    Connectivity,
    Global,
}

impl Solution {
    /// Получить код решения (в таком виде он уходит на сервер)
    pub fn code(&self) -> &'static str {
        match self {
            Solution::Vmware => "vmware",
            Solution::Huawei => "huawei",
            Solution::Staas => "staas",
            Solution::Baas => "baas",
            Solution::Draas => "draas",
            Solution::Office365 => "office365",
            Solution::Colocation => "colocation",
            Solution::Connectivity => "connectivity",
            Solution::Global => "global",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Solution::Vmware => "Облако VMware",
            Solution::Huawei => "Облако Huawei",
            Solution::Staas => "STaaS",
            Solution::Baas => "BaaS",
            Solution::Draas => "DRaaS",
            Solution::Office365 => "Office 365",
            Solution::Colocation => "Колокация",
            Solution::Connectivity => "Каналы связи",
            Solution::Global => "Прочее",
        }
    }

    /// Получить все решения в порядке отображения
    pub fn all() -> Vec<Solution> {
        vec![
            Solution::Vmware,
            Solution::Huawei,
            Solution::Staas,
            Solution::Baas,
            Solution::Draas,
            Solution::Office365,
            Solution::Colocation,
            Solution::Connectivity,
            Solution::Global,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vmware" => Some(Solution::Vmware),
            "huawei" => Some(Solution::Huawei),
            "staas" => Some(Solution::Staas),
            "baas" => Some(Solution::Baas),
            "draas" => Some(Solution::Draas),
            "office365" => Some(Solution::Office365),
            "colocation" => Some(Solution::Colocation),
            "connectivity" => Some(Solution::Connectivity),
            "global" => Some(Solution::Global),
            _ => None,
        }
    }
}

impl ToString for Solution {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for solution in Solution::all() {
            assert_eq!(Solution::from_code(solution.code()), Some(solution));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Solution::from_code("aws"), None);
        assert_eq!(Solution::from_code(""), None);
    }
}
