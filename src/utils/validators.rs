// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use ipnetwork::Ipv4Network;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::net::Ipv4Addr;

/// 域名的最大长度（不含末尾的点）
const MAX_DOMAIN_LEN: usize = 253;

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z][a-z0-9-]{0,61}[a-z0-9]$")
        .expect("domain pattern is valid")
});

/// IP类扫描目标
///
/// 支持三种写法：单个IPv4地址、CIDR网段（`10.0.0.0/24`）
/// 以及末位区间（`10.0.0.1-20`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpTarget {
    /// 单个地址
    Single(Ipv4Addr),
    /// CIDR网段
    Network(Ipv4Network),
    /// 同一 /24 内的闭区间
    Range { start: Ipv4Addr, end: Ipv4Addr },
}

impl IpTarget {
    /// 目标覆盖的首尾地址（闭区间）
    pub fn bounds(&self) -> (Ipv4Addr, Ipv4Addr) {
        match *self {
            IpTarget::Single(addr) => (addr, addr),
            IpTarget::Network(net) => (net.network(), net.broadcast()),
            IpTarget::Range { start, end } => (start, end),
        }
    }

    /// 判断目标是否与给定网段有交集
    pub fn overlaps(&self, network: &Ipv4Network) -> bool {
        let (start, end) = self.bounds();
        u32::from(network.network()) <= u32::from(end)
            && u32::from(start) <= u32::from(network.broadcast())
    }
}

impl fmt::Display for IpTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpTarget::Single(addr) => write!(f, "{}", addr),
            IpTarget::Network(net) => write!(f, "{}", net),
            IpTarget::Range { start, end } => write!(f, "{}-{}", start, end.octets()[3]),
        }
    }
}

/// 解析IP类目标
///
/// # 参数
///
/// * `target` - 已经过小写和去空白处理的单个目标
///
/// # 返回值
///
/// * `Some(IpTarget)` - 目标符合IP语法
/// * `None` - 目标不是IP类目标
pub fn parse_ip_target(target: &str) -> Option<IpTarget> {
    if let Some((addr, prefix)) = target.split_once('/') {
        let addr = parse_dotted_quad(addr)?;
        let prefix = parse_decimal(prefix)?;
        if prefix > 32 {
            return None;
        }
        return Ipv4Network::new(addr, prefix as u8)
            .ok()
            .map(IpTarget::Network);
    }

    if let Some((addr, last)) = target.split_once('-') {
        let start = parse_dotted_quad(addr)?;
        let last = parse_decimal(last)?;
        let octets = start.octets();
        if last > 255 || last < u32::from(octets[3]) {
            return None;
        }
        let end = Ipv4Addr::new(octets[0], octets[1], octets[2], last as u8);
        return Some(IpTarget::Range { start, end });
    }

    parse_dotted_quad(target).map(IpTarget::Single)
}

/// 判断是否为合法的IP类目标
pub fn is_valid_ip_target(target: &str) -> bool {
    parse_ip_target(target).is_some()
}

/// 判断是否为合法域名
///
/// 要求至少两级、每级不超过63个字符，且顶级域以字母开头，
/// 以免把 `1.2.3` 这类残缺地址当作域名。
pub fn is_valid_domain(domain: &str) -> bool {
    domain.len() <= MAX_DOMAIN_LEN && DOMAIN_RE.is_match(domain)
}

// Only plain decimal dotted quads; `Ipv4Addr::from_str` already rejects
// leading zeros and out-of-range octets.
fn parse_dotted_quad(value: &str) -> Option<Ipv4Addr> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    value.parse().ok()
}

fn parse_decimal(value: &str) -> Option<u32> {
    if value.is_empty() || value.len() > 3 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
