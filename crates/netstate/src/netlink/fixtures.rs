//! rtnetlink message fixtures for testing.
//!
//! Pre-captured kernel messages (payload only, nlmsghdr stripped) for
//! exercising the decoders without a live socket. Provided as functions
//! returning Vec<u8> so the buffers are properly aligned for the parser.

/// Default IPv4 route in the main table via 10.0.0.1 on interface 3.
pub fn route_default_v4() -> Vec<u8> {
    vec![
        // rtmsg: family=AF_INET, dst_len=0 (default), src_len=0, tos=0,
        // table=RT_TABLE_MAIN, protocol=RTPROT_DHCP, scope=universe, type=unicast
        0x02, // family = AF_INET
        0x00, // dst_len = 0
        0x00, // src_len = 0
        0x00, // tos = 0
        0xfe, // table = RT_TABLE_MAIN (254)
        0x10, // protocol = RTPROT_DHCP (16)
        0x00, // scope = RT_SCOPE_UNIVERSE
        0x01, // type = RTN_UNICAST
        0x00, 0x00, 0x00, 0x00, // flags = 0
        // RTA_OIF = 3
        0x08, 0x00, // len = 8
        0x04, 0x00, // type = RTA_OIF (4)
        0x03, 0x00, 0x00, 0x00, // oif = 3
        // RTA_GATEWAY = 10.0.0.1
        0x08, 0x00, // len = 8
        0x05, 0x00, // type = RTA_GATEWAY (5)
        0x0a, 0x00, 0x00, 0x01, // 10.0.0.1
    ]
}

/// Host route (192.168.1.77/32) in the main table. Not a default route.
pub fn route_host_v4() -> Vec<u8> {
    vec![
        // rtmsg: family=AF_INET, dst_len=32, table=RT_TABLE_MAIN
        0x02, // family = AF_INET
        0x20, // dst_len = 32
        0x00, // src_len = 0
        0x00, // tos = 0
        0xfe, // table = RT_TABLE_MAIN (254)
        0x03, // protocol = RTPROT_BOOT (3)
        0x00, // scope = RT_SCOPE_UNIVERSE
        0x01, // type = RTN_UNICAST
        0x00, 0x00, 0x00, 0x00, // flags = 0
        // RTA_DST = 192.168.1.77
        0x08, 0x00, // len = 8
        0x01, 0x00, // type = RTA_DST (1)
        0xc0, 0xa8, 0x01, 0x4d, // 192.168.1.77
        // RTA_OIF = 2
        0x08, 0x00, // len = 8
        0x04, 0x00, // type = RTA_OIF (4)
        0x02, 0x00, 0x00, 0x00, // oif = 2
    ]
}

/// IPv4 address 192.168.1.5/24 on interface 2, permanent.
pub fn addr_eth_v4() -> Vec<u8> {
    vec![
        // ifaddrmsg: family=AF_INET, prefixlen=24, flags=IFA_F_PERMANENT,
        // scope=RT_SCOPE_UNIVERSE, index=2
        0x02, // family = AF_INET
        0x18, // prefixlen = 24
        0x80, // flags = IFA_F_PERMANENT
        0x00, // scope = RT_SCOPE_UNIVERSE
        0x02, 0x00, 0x00, 0x00, // index = 2
        // IFA_ADDRESS = 192.168.1.5
        0x08, 0x00, // len = 8
        0x01, 0x00, // type = IFA_ADDRESS (1)
        0xc0, 0xa8, 0x01, 0x05, // 192.168.1.5
    ]
}

/// IPv6 link-local address fe80::1/64 on interface 2, with a 32-bit
/// IFA_FLAGS attribute overriding the zeroed header flags.
pub fn addr_ll_v6_with_flags() -> Vec<u8> {
    vec![
        // ifaddrmsg: family=AF_INET6, prefixlen=64, flags=0, scope=RT_SCOPE_LINK, index=2
        0x0a, // family = AF_INET6
        0x40, // prefixlen = 64
        0x00, // flags = 0 (real value is in IFA_FLAGS)
        0xfd, // scope = RT_SCOPE_LINK (253)
        0x02, 0x00, 0x00, 0x00, // index = 2
        // IFA_ADDRESS = fe80::1
        0x14, 0x00, // len = 20
        0x01, 0x00, // type = IFA_ADDRESS (1)
        0xfe, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // fe80::1 (first 8 bytes)
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, // fe80::1 (last 8 bytes)
        // IFA_FLAGS = 0x80 (IFA_F_PERMANENT)
        0x08, 0x00, // len = 8
        0x08, 0x00, // type = IFA_FLAGS (8)
        0x80, 0x00, 0x00, 0x00, // flags = 0x80
    ]
}

/// Reachable ARP entry for 192.168.1.1 at aa:bb:cc:dd:ee:ff on interface 2.
pub fn neigh_reachable_v4() -> Vec<u8> {
    vec![
        // ndmsg: family=AF_INET, pad, ifindex=2, state=NUD_REACHABLE, flags=0, type=0
        0x02, // family = AF_INET
        0x00, // pad1
        0x00, 0x00, // pad2
        0x02, 0x00, 0x00, 0x00, // ifindex = 2
        0x02, 0x00, // state = NUD_REACHABLE (0x02)
        0x00, // flags = 0
        0x00, // type = 0
        // NDA_DST = 192.168.1.1
        0x08, 0x00, // len = 8
        0x01, 0x00, // type = NDA_DST (1)
        0xc0, 0xa8, 0x01, 0x01, // 192.168.1.1
        // NDA_LLADDR = aa:bb:cc:dd:ee:ff
        0x0a, 0x00, // len = 10
        0x02, 0x00, // type = NDA_LLADDR (2)
        0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, // MAC address
        0x00, 0x00, // padding
    ]
}
